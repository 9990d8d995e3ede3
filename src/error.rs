//! Error types for engine construction and reseeding
//!
//! The step/paint/schedule hot path is total over validated inputs and never
//! returns errors; everything here surfaces at construction or reseed time.

use thiserror::Error;

/// Errors reported when building or reseeding a simulation
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    /// A seed payload does not cover the grid exactly. The engine refuses to
    /// truncate or pad and keeps the previous state intact.
    #[error("seed payload holds {actual} cells but a {side}x{side} grid needs {expected}")]
    SeedSizeMismatch {
        side: usize,
        expected: usize,
        actual: usize,
    },

    /// Grid side length must be at least one cell.
    #[error("grid side must be positive, got {0}")]
    InvalidSide(usize),

    /// Brush width must be a positive number of grid cells.
    #[error("brush width must be positive, got {0}")]
    InvalidBrushWidth(f32),
}
