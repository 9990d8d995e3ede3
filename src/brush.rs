//! Brush editing
//!
//! Writes an editor-chosen cell value into a localized footprint of the
//! grid, the interactive counterpart to the automatic rule step. The
//! footprint is a square of side `2 * width` grid cells centered at a
//! normalized pointer position, wrapped toroidally like every other grid
//! access.

use cgmath::Vector2;

use crate::grid::{Cell, GridBuffer};

/// One frame's worth of brush input: where, how wide, and which value
///
/// `center` is the pointer position normalized to `[0, 1]^2`; `width` is a
/// radius in grid cells. Snapshotted by the host once per frame, never read
/// from ambient state.
#[derive(Debug, Clone, Copy)]
pub struct BrushStroke {
    pub center: Vector2<f32>,
    pub width: f32,
    pub value: Cell,
}

/// Paint `stroke.value` into every cell the brush covers
///
/// Each covered cell receives the full value; there are no partial or
/// blended writes, so painting the same stroke twice leaves the grid exactly
/// as painting it once (idempotence). Cells are covered when they intersect
/// the square `[cx - width, cx + width] x [cy - width, cy + width]` in grid
/// space; coverage at the rasterization boundary is single-pixel accurate,
/// not antialiased.
pub fn paint(grid: &mut GridBuffer, stroke: &BrushStroke) {
    let side = grid.side() as f32;
    let cx = stroke.center.x * side;
    let cy = stroke.center.y * side;

    let x0 = (cx - stroke.width).floor() as i64;
    let x1 = (cx + stroke.width).ceil() as i64;
    let y0 = (cy - stroke.width).floor() as i64;
    let y1 = (cy + stroke.width).ceil() as i64;

    for y in y0..y1 {
        for x in x0..x1 {
            grid.write(x, y, stroke.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke(x: f32, y: f32, width: f32) -> BrushStroke {
        BrushStroke {
            center: Vector2::new(x, y),
            width,
            value: Cell::rgb(255, 255, 255),
        }
    }

    #[test]
    fn test_paint_is_idempotent() {
        let mut once = GridBuffer::new(16, Cell::EMPTY).unwrap();
        let mut twice = GridBuffer::new(16, Cell::EMPTY).unwrap();
        let s = stroke(0.3, 0.7, 2.5);

        paint(&mut once, &s);
        paint(&mut twice, &s);
        paint(&mut twice, &s);

        assert_eq!(once.cells(), twice.cells());
    }

    #[test]
    fn test_footprint_is_centered_square() {
        let mut grid = GridBuffer::new(16, Cell::EMPTY).unwrap();
        // center lands exactly on cell (8, 8); width 2 covers 4x4 cells
        paint(&mut grid, &stroke(0.5, 0.5, 2.0));

        let painted = grid
            .cells()
            .iter()
            .filter(|&&c| c != Cell::EMPTY)
            .count();
        assert_eq!(painted, 16);
        assert_ne!(grid.read(6, 6), Cell::EMPTY);
        assert_ne!(grid.read(9, 9), Cell::EMPTY);
        assert_eq!(grid.read(5, 8), Cell::EMPTY);
        assert_eq!(grid.read(10, 8), Cell::EMPTY);
    }

    #[test]
    fn test_footprint_wraps_at_the_seam() {
        let mut grid = GridBuffer::new(16, Cell::EMPTY).unwrap();
        // brushing at the origin spills onto the opposite edges
        paint(&mut grid, &stroke(0.0, 0.0, 2.0));

        assert_ne!(grid.read(1, 1), Cell::EMPTY);
        assert_ne!(grid.read(14, 14), Cell::EMPTY);
        assert_eq!(grid.read(8, 8), Cell::EMPTY);

        let painted = grid
            .cells()
            .iter()
            .filter(|&&c| c != Cell::EMPTY)
            .count();
        assert_eq!(painted, 16);
    }
}
