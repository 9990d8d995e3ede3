//! Toroidal grid storage
//!
//! Provides the square, wrap-around cell grid every automaton runs on, plus
//! the double buffer that keeps rule reads and writes on separate grids
//! within a step.

pub mod cell;
pub mod double_buffer;

pub use cell::Cell;
pub use double_buffer::DoubleBuffer;

use crate::error::EngineError;

/// A square grid of cells with toroidal (wrap-around) addressing
///
/// Coordinates are taken modulo the side length, so any finite integer pair
/// names a valid cell and there are no edge cells to special-case. The side
/// is fixed for the lifetime of the grid; a resize always builds a new grid.
#[derive(Debug)]
pub struct GridBuffer {
    side: usize,
    cells: Vec<Cell>,
}

impl GridBuffer {
    /// Create a grid of `side * side` cells, uniformly filled
    ///
    /// # Arguments
    /// * `side` - Side length in cells, must be positive
    /// * `fill` - Value written into every cell
    pub fn new(side: usize, fill: Cell) -> Result<Self, EngineError> {
        if side == 0 {
            return Err(EngineError::InvalidSide(side));
        }
        Ok(Self {
            side,
            cells: vec![fill; side * side],
        })
    }

    /// Create a grid from an externally supplied cell payload
    ///
    /// The payload must hold exactly `side * side` cells (e.g. a decoded
    /// image already resampled by the caller); anything else fails fast
    /// rather than risk a silently truncated or padded grid.
    pub fn from_cells(side: usize, cells: Vec<Cell>) -> Result<Self, EngineError> {
        if side == 0 {
            return Err(EngineError::InvalidSide(side));
        }
        let expected = side * side;
        if cells.len() != expected {
            return Err(EngineError::SeedSizeMismatch {
                side,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { side, cells })
    }

    /// Side length in cells
    pub fn side(&self) -> usize {
        self.side
    }

    /// Row-major index after toroidal wrapping
    fn index(&self, x: i64, y: i64) -> usize {
        let side = self.side as i64;
        let x = x.rem_euclid(side) as usize;
        let y = y.rem_euclid(side) as usize;
        y * self.side + x
    }

    /// Read the cell at `(x, y)`, wrapping out-of-range coordinates
    ///
    /// Never fails: negative and oversized coordinates land on the torus.
    pub fn read(&self, x: i64, y: i64) -> Cell {
        self.cells[self.index(x, y)]
    }

    /// Write `value` into the cell at `(x, y)`, wrapping coordinates
    ///
    /// Mutates exactly one cell.
    pub fn write(&mut self, x: i64, y: i64, value: Cell) {
        let index = self.index(x, y);
        self.cells[index] = value;
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Raw channel bytes in row-major RGBA order
    ///
    /// This is the hand-off to the external presentation layer: a renderer
    /// can upload or blit this slice directly at the grid's native
    /// resolution. The core never issues draw calls itself.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }
}
