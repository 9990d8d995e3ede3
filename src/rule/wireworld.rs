//! Two-wire Wireworld variant
//!
//! Cells are classified against a fixed RGB palette into empty space, two
//! electrically separate wire colors, connectors bridging them, and the
//! head/tail excitation phases. The decay table:
//!
//! - a head always decays to a tail, a tail to its wire's conductor;
//! - a conductor fires (becomes a head) iff exactly 1 or 2 of its Moore
//!   neighbors are in a head phase of its own color or a connector flash;
//! - a connector flashes when any neighbor is in a head phase, then decays
//!   back to a plain connector, relaying the signal across wire colors.
//!
//! Green and blue nets never excite each other directly; a connector is the
//! only crossing point.

use super::TransitionRule;
use crate::grid::{Cell, GridBuffer};

/// The two electrically separate wire colors
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WireKind {
    Green,
    Blue,
}

/// Palette-decoded cell classification
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum WireState {
    Empty,
    Wire(WireKind),
    Head(WireKind),
    Tail(WireKind),
    Connector,
    ConnectorHead,
    ConnectorTail,
}

impl WireState {
    /// Head-phase states excite neighboring conductors; tails are
    /// refractory so a signal cannot immediately re-enter the cell it
    /// just left.
    fn is_excited(self) -> bool {
        matches!(self, WireState::Head(_) | WireState::ConnectorHead)
    }

    /// Whether this head phase can fire a conductor of color `kind`
    fn excites(self, kind: WireKind) -> bool {
        match self {
            WireState::Head(k) => k == kind,
            WireState::ConnectorHead => true,
            _ => false,
        }
    }
}

/// The Wireworld transition rule
#[derive(Debug, Default, Clone, Copy)]
pub struct WireworldRule;

impl WireworldRule {
    pub const EMPTY: Cell = Cell::rgb(0, 0, 0);
    pub const GREEN_WIRE: Cell = Cell::rgb(0, 255, 0);
    pub const BLUE_WIRE: Cell = Cell::rgb(0, 0, 255);
    pub const HEAD_GREEN: Cell = Cell::rgb(255, 255, 0);
    pub const HEAD_BLUE: Cell = Cell::rgb(255, 0, 255);
    pub const TAIL_GREEN: Cell = Cell::rgb(128, 255, 0);
    pub const TAIL_BLUE: Cell = Cell::rgb(128, 0, 255);
    pub const CONNECTOR: Cell = Cell::rgb(255, 128, 0);
    pub const CONNECTOR_HEAD: Cell = Cell::rgb(255, 255, 255);
    pub const CONNECTOR_TAIL: Cell = Cell::rgb(128, 128, 128);

    const BRUSH_VALUES: [Cell; 6] = [
        Self::EMPTY,
        Self::GREEN_WIRE,
        Self::BLUE_WIRE,
        Self::CONNECTOR,
        Self::HEAD_GREEN,
        Self::HEAD_BLUE,
    ];

    /// Palette lookup; anything off-palette (e.g. image-seeded noise)
    /// reads as empty space.
    fn classify(cell: Cell) -> WireState {
        match cell {
            Self::GREEN_WIRE => WireState::Wire(WireKind::Green),
            Self::BLUE_WIRE => WireState::Wire(WireKind::Blue),
            Self::HEAD_GREEN => WireState::Head(WireKind::Green),
            Self::HEAD_BLUE => WireState::Head(WireKind::Blue),
            Self::TAIL_GREEN => WireState::Tail(WireKind::Green),
            Self::TAIL_BLUE => WireState::Tail(WireKind::Blue),
            Self::CONNECTOR => WireState::Connector,
            Self::CONNECTOR_HEAD => WireState::ConnectorHead,
            Self::CONNECTOR_TAIL => WireState::ConnectorTail,
            _ => WireState::Empty,
        }
    }

    fn cell_for(state: WireState) -> Cell {
        match state {
            WireState::Empty => Self::EMPTY,
            WireState::Wire(WireKind::Green) => Self::GREEN_WIRE,
            WireState::Wire(WireKind::Blue) => Self::BLUE_WIRE,
            WireState::Head(WireKind::Green) => Self::HEAD_GREEN,
            WireState::Head(WireKind::Blue) => Self::HEAD_BLUE,
            WireState::Tail(WireKind::Green) => Self::TAIL_GREEN,
            WireState::Tail(WireKind::Blue) => Self::TAIL_BLUE,
            WireState::Connector => Self::CONNECTOR,
            WireState::ConnectorHead => Self::CONNECTOR_HEAD,
            WireState::ConnectorTail => Self::CONNECTOR_TAIL,
        }
    }

    /// Visit the 8 Moore neighbors of `(x, y)` in the previous state
    fn neighbors(previous: &GridBuffer, x: i64, y: i64) -> impl Iterator<Item = WireState> + '_ {
        (-1..=1).flat_map(move |dy| {
            (-1..=1).filter_map(move |dx| {
                if dx == 0 && dy == 0 {
                    None
                } else {
                    Some(Self::classify(previous.read(x + dx, y + dy)))
                }
            })
        })
    }
}

impl TransitionRule for WireworldRule {
    fn next_cell(&self, previous: &GridBuffer, x: i64, y: i64) -> Cell {
        let state = Self::classify(previous.read(x, y));

        let next = match state {
            WireState::Empty => WireState::Empty,
            WireState::Head(kind) => WireState::Tail(kind),
            WireState::Tail(kind) => WireState::Wire(kind),
            WireState::Wire(kind) => {
                let heads = Self::neighbors(previous, x, y)
                    .filter(|n| n.excites(kind))
                    .count();
                if heads == 1 || heads == 2 {
                    WireState::Head(kind)
                } else {
                    WireState::Wire(kind)
                }
            }
            WireState::Connector => {
                if Self::neighbors(previous, x, y).any(|n| n.is_excited()) {
                    WireState::ConnectorHead
                } else {
                    WireState::Connector
                }
            }
            WireState::ConnectorHead => WireState::ConnectorTail,
            WireState::ConnectorTail => WireState::Connector,
        };

        Self::cell_for(next)
    }

    fn brush_values(&self) -> &[Cell] {
        &Self::BRUSH_VALUES
    }

    fn seed_alive(&self) -> Cell {
        Self::GREEN_WIRE
    }

    fn seed_empty(&self) -> Cell {
        Self::EMPTY
    }

    fn name(&self) -> &str {
        "Wireworld"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(grid: &GridBuffer) -> GridBuffer {
        let side = grid.side();
        let mut next = GridBuffer::new(side, Cell::EMPTY).unwrap();
        let rule = WireworldRule;
        for y in 0..side as i64 {
            for x in 0..side as i64 {
                next.write(x, y, rule.next_cell(grid, x, y));
            }
        }
        next
    }

    #[test]
    fn test_head_decays_through_tail_to_wire() {
        let mut grid = GridBuffer::new(8, WireworldRule::EMPTY).unwrap();
        grid.write(4, 4, WireworldRule::HEAD_GREEN);
        grid.write(5, 5, WireworldRule::HEAD_BLUE);

        let grid = step(&grid);
        assert_eq!(grid.read(4, 4), WireworldRule::TAIL_GREEN);
        assert_eq!(grid.read(5, 5), WireworldRule::TAIL_BLUE);

        let grid = step(&grid);
        assert_eq!(grid.read(4, 4), WireworldRule::GREEN_WIRE);
        assert_eq!(grid.read(5, 5), WireworldRule::BLUE_WIRE);
    }

    #[test]
    fn test_wire_fires_on_one_or_two_heads() {
        let mut grid = GridBuffer::new(8, WireworldRule::EMPTY).unwrap();
        grid.write(2, 2, WireworldRule::HEAD_GREEN);
        grid.write(3, 2, WireworldRule::GREEN_WIRE);
        let next = step(&grid);
        assert_eq!(next.read(3, 2), WireworldRule::HEAD_GREEN);

        let mut grid = GridBuffer::new(8, WireworldRule::EMPTY).unwrap();
        grid.write(2, 1, WireworldRule::HEAD_GREEN);
        grid.write(2, 3, WireworldRule::HEAD_GREEN);
        grid.write(3, 2, WireworldRule::GREEN_WIRE);
        let next = step(&grid);
        assert_eq!(next.read(3, 2), WireworldRule::HEAD_GREEN);
    }

    #[test]
    fn test_wire_holds_on_three_heads() {
        let mut grid = GridBuffer::new(8, WireworldRule::EMPTY).unwrap();
        grid.write(2, 1, WireworldRule::HEAD_GREEN);
        grid.write(2, 2, WireworldRule::HEAD_GREEN);
        grid.write(2, 3, WireworldRule::HEAD_GREEN);
        grid.write(3, 2, WireworldRule::GREEN_WIRE);
        let next = step(&grid);
        assert_eq!(next.read(3, 2), WireworldRule::GREEN_WIRE);
    }

    #[test]
    fn test_wire_colors_are_isolated() {
        let mut grid = GridBuffer::new(8, WireworldRule::EMPTY).unwrap();
        grid.write(2, 2, WireworldRule::HEAD_BLUE);
        grid.write(3, 2, WireworldRule::GREEN_WIRE);
        let next = step(&grid);
        assert_eq!(next.read(3, 2), WireworldRule::GREEN_WIRE);
    }

    #[test]
    fn test_connector_relays_across_colors() {
        // green head -> connector -> blue wire: the flash crosses in two
        // steps and fires the blue net.
        let mut grid = GridBuffer::new(8, WireworldRule::EMPTY).unwrap();
        grid.write(2, 2, WireworldRule::HEAD_GREEN);
        grid.write(3, 2, WireworldRule::CONNECTOR);
        grid.write(4, 2, WireworldRule::BLUE_WIRE);

        let grid = step(&grid);
        assert_eq!(grid.read(3, 2), WireworldRule::CONNECTOR_HEAD);
        assert_eq!(grid.read(4, 2), WireworldRule::BLUE_WIRE);

        let grid = step(&grid);
        assert_eq!(grid.read(3, 2), WireworldRule::CONNECTOR_TAIL);
        assert_eq!(grid.read(4, 2), WireworldRule::HEAD_BLUE);

        let grid = step(&grid);
        assert_eq!(grid.read(3, 2), WireworldRule::CONNECTOR);
    }

    #[test]
    fn test_empty_grid_is_a_fixed_point() {
        let grid = GridBuffer::new(8, WireworldRule::EMPTY).unwrap();
        let next = step(&grid);
        assert!(next.cells().iter().all(|&c| c == WireworldRule::EMPTY));
    }
}
