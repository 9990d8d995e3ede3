//! Conway's Life, closed-form variant
//!
//! Accumulates the 3x3 neighborhood sum INCLUDING the center cell, then
//! applies the single inequality `3 <= n <= 3 + s` (where `s` is the
//! center's own state). Folding self-inclusion into the threshold is exactly
//! equivalent to textbook Life (survive on 2-3 neighbors, born on 3) but the
//! inequality is kept verbatim rather than re-derived, so image-seeded grids
//! with fractional intensities behave the same as the reference automaton.

use super::TransitionRule;
use crate::grid::{Cell, GridBuffer};

/// The Life transition rule
#[derive(Debug, Default, Clone, Copy)]
pub struct LifeRule;

impl LifeRule {
    pub const ALIVE: Cell = Cell::rgb(255, 255, 255);
    pub const DEAD: Cell = Cell::rgb(0, 0, 0);

    const BRUSH_VALUES: [Cell; 2] = [Self::ALIVE, Self::DEAD];
}

impl TransitionRule for LifeRule {
    fn next_cell(&self, previous: &GridBuffer, x: i64, y: i64) -> Cell {
        let mut n = 0.0f32;
        for dy in -1..=1 {
            for dx in -1..=1 {
                n += previous.read(x + dx, y + dy).intensity();
            }
        }
        let s = previous.read(x, y).intensity();

        if n < 3.0 || n > 3.0 + s {
            Self::DEAD
        } else {
            Self::ALIVE
        }
    }

    fn brush_values(&self) -> &[Cell] {
        &Self::BRUSH_VALUES
    }

    fn seed_alive(&self) -> Cell {
        Self::ALIVE
    }

    fn seed_empty(&self) -> Cell {
        Self::DEAD
    }

    fn name(&self) -> &str {
        "Life"
    }
}
