//! # Life - Terminal Demo
//!
//! Drives the engine headlessly and renders each requested frame as ASCII,
//! standing in for the external presentation layer. A scripted pointer drag
//! shows the brush path: painting happens after the scheduled steps of the
//! same frame, so the strokes survive into the next generation.

use anyhow::Result;
use cgmath::Vector2;
use lattice_loop::{ControlState, FrameInput, LifeRule, PointerState};

const SIDE: usize = 32;
const FRAMES: u64 = 30;

fn draw(cells: &[lattice_loop::Cell], side: usize, frame: u64, tick: u64) {
    println!("frame {frame:>3}  tick {tick:>3}");
    for y in 0..side {
        let row: String = (0..side)
            .map(|x| {
                if cells[y * side + x] == LifeRule::ALIVE {
                    '#'
                } else {
                    '.'
                }
            })
            .collect();
        println!("{row}");
    }
    println!();
}

fn main() -> Result<()> {
    env_logger::init();

    let mut engine = lattice_loop::life(SIDE)?;

    let controls = ControlState {
        running: true,
        rate: -1, // one step every other frame
        brush_width: 1.5,
        ..Default::default()
    };

    for frame in 0..FRAMES {
        // Drag the pointer along a diagonal for the first third of the run.
        let pointer = if frame < FRAMES / 3 {
            PointerState {
                position: Vector2::new(frame as f32 / FRAMES as f32, 0.5),
                pressed: true,
            }
        } else {
            PointerState::default()
        };

        let input = FrameInput { controls, pointer };
        let output = engine.advance_frame(&input);

        if output.render_requested {
            draw(engine.current().cells(), SIDE, frame, engine.tick());
        }
    }

    Ok(())
}
