//! Double-buffered grid pair
//!
//! Two grids of identical side plus a single `flipped` bit. The bit alone
//! decides which grid is the front (latest completed state) and which is the
//! back (scratch written by the next step); swapping roles is an O(1) toggle
//! with no data movement.

use super::{Cell, GridBuffer};
use crate::error::EngineError;

/// Exactly two grids alternating between front and back roles
///
/// Rule steps read the front and write the back through [`step_views`],
/// which hands out `(&GridBuffer, &mut GridBuffer)` so the borrow checker
/// makes reading your own writes within a step impossible. Callers never see
/// a raw buffer handle, only the role accessors.
///
/// [`step_views`]: DoubleBuffer::step_views
pub struct DoubleBuffer {
    grids: [GridBuffer; 2],
    flipped: bool,
}

impl DoubleBuffer {
    /// Build a buffer pair around a seeded front grid
    ///
    /// The back grid starts blank; its contents are irrelevant because a
    /// full-grid step overwrites every cell before the next swap exposes it.
    pub fn from_grid(front: GridBuffer) -> Result<Self, EngineError> {
        let back = GridBuffer::new(front.side(), Cell::EMPTY)?;
        Ok(Self {
            grids: [front, back],
            flipped: false,
        })
    }

    /// Side length shared by both grids
    pub fn side(&self) -> usize {
        self.grids[0].side()
    }

    /// The grid holding the most recently completed state
    pub fn current(&self) -> &GridBuffer {
        &self.grids[self.flipped as usize]
    }

    /// Mutable access to the most recent state, for post-step edits
    ///
    /// This is the brush's write target: edits applied here land on top of
    /// the latest step result and are what the next step reads.
    pub fn current_mut(&mut self) -> &mut GridBuffer {
        &mut self.grids[self.flipped as usize]
    }

    /// Split into `(previous, next)` views for one rule step
    ///
    /// `previous` is the read-only front, `next` the writable back. Call
    /// [`swap`](DoubleBuffer::swap) once the step has written every cell.
    pub fn step_views(&mut self) -> (&GridBuffer, &mut GridBuffer) {
        let [first, second] = &mut self.grids;
        if self.flipped {
            (second, first)
        } else {
            (first, second)
        }
    }

    /// Toggle front/back roles; O(1), no cell is copied
    pub fn swap(&mut self) {
        self.flipped = !self.flipped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_is_a_logical_toggle() {
        let front = GridBuffer::new(4, Cell::EMPTY).unwrap();
        let mut buffers = DoubleBuffer::from_grid(front).unwrap();
        let sentinel = Cell::rgb(200, 100, 50);

        // Write a sentinel into the back only, then swap. If swap moved data
        // instead of toggling roles the sentinel would not come back.
        {
            let (_, next) = buffers.step_views();
            next.write(2, 2, sentinel);
        }
        assert_eq!(buffers.current().read(2, 2), Cell::EMPTY);

        buffers.swap();
        assert_eq!(buffers.current().read(2, 2), sentinel);

        buffers.swap();
        assert_eq!(buffers.current().read(2, 2), Cell::EMPTY);
    }

    #[test]
    fn test_step_views_roles_follow_flip() {
        let mut front = GridBuffer::new(4, Cell::EMPTY).unwrap();
        let marked = Cell::rgb(1, 1, 1);
        front.write(0, 0, marked);
        let mut buffers = DoubleBuffer::from_grid(front).unwrap();

        let (previous, _) = buffers.step_views();
        assert_eq!(previous.read(0, 0), marked);

        buffers.swap();
        let (previous, _) = buffers.step_views();
        assert_eq!(previous.read(0, 0), Cell::EMPTY);
    }
}
