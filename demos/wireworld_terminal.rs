//! # Wireworld - Terminal Demo
//!
//! Paints a small two-color circuit with brush strokes, then lets the engine
//! run and prints the signal racing around it. The green and blue nets only
//! talk through the connector in the middle.

use anyhow::Result;
use cgmath::Vector2;
use lattice_loop::{Cell, ControlState, FrameInput, PointerState, WireworldRule};

const SIDE: usize = 24;

fn glyph(cell: Cell) -> char {
    match cell {
        WireworldRule::GREEN_WIRE => 'g',
        WireworldRule::BLUE_WIRE => 'b',
        WireworldRule::HEAD_GREEN | WireworldRule::HEAD_BLUE => '@',
        WireworldRule::TAIL_GREEN | WireworldRule::TAIL_BLUE => 'o',
        WireworldRule::CONNECTOR => '+',
        WireworldRule::CONNECTOR_HEAD => '*',
        WireworldRule::CONNECTOR_TAIL => ':',
        _ => '.',
    }
}

fn draw(cells: &[Cell], side: usize, tick: u64) {
    println!("tick {tick:>3}");
    for y in 0..side {
        let row: String = (0..side).map(|x| glyph(cells[y * side + x])).collect();
        println!("{row}");
    }
    println!();
}

/// One paused frame with the brush held at a normalized position
fn paint_at(
    engine: &mut lattice_loop::SimulationLoop<WireworldRule>,
    x: f32,
    y: f32,
    width: f32,
    brush_index: usize,
) {
    let input = FrameInput {
        controls: ControlState {
            running: false,
            brush_width: width,
            brush_index,
            ..Default::default()
        },
        pointer: PointerState {
            position: Vector2::new(x, y),
            pressed: true,
        },
    };
    engine.advance_frame(&input);
}

fn main() -> Result<()> {
    env_logger::init();

    let mut engine = lattice_loop::wireworld(SIDE)?;

    // Horizontal green wire with a connector in the middle feeding a blue
    // segment on the right. Brush indices follow the rule's palette order:
    // 1 = green wire, 2 = blue wire, 3 = connector, 4 = green head.
    for i in 0..8 {
        paint_at(&mut engine, 0.1 + i as f32 * 0.05, 0.5, 0.5, 1);
    }
    paint_at(&mut engine, 0.5, 0.5, 0.5, 3);
    for i in 0..8 {
        paint_at(&mut engine, 0.55 + i as f32 * 0.05, 0.5, 0.5, 2);
    }
    // Spark the green end.
    paint_at(&mut engine, 0.1, 0.5, 0.5, 4);

    draw(engine.current().cells(), SIDE, engine.tick());

    let controls = ControlState {
        running: true,
        rate: 0,
        ..Default::default()
    };
    for _ in 0..12 {
        let input = FrameInput {
            controls,
            pointer: PointerState::default(),
        };
        let output = engine.advance_frame(&input);
        if output.render_requested {
            draw(engine.current().cells(), SIDE, engine.tick());
        }
    }

    Ok(())
}
