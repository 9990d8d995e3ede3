//! Cell value type shared by every automaton variant
//!
//! A cell is four 8-bit channels with no identity beyond its grid position.
//! What the channels mean is up to the transition rule: Life reads a single
//! intensity channel, Wireworld matches the full RGB triple against a palette.

use bytemuck::{Pod, Zeroable};

/// One grid cell: RGBA channels in `0..=255`
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Pod, Zeroable)]
pub struct Cell(pub [u8; 4]);

impl Cell {
    /// Fully dark, fully opaque cell
    pub const EMPTY: Cell = Cell::rgb(0, 0, 0);

    /// Build an opaque cell from an RGB triple
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Cell([r, g, b, 255])
    }

    pub const fn r(&self) -> u8 {
        self.0[0]
    }

    pub const fn g(&self) -> u8 {
        self.0[1]
    }

    pub const fn b(&self) -> u8 {
        self.0[2]
    }

    /// First channel normalized to `[0, 1]`
    ///
    /// Life-style rules accumulate this over a neighborhood, so image-seeded
    /// grids with intermediate gray values participate in the sum instead of
    /// being snapped to binary up front.
    pub fn intensity(&self) -> f32 {
        self.0[0] as f32 / 255.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_normalization() {
        assert_eq!(Cell::rgb(0, 9, 9).intensity(), 0.0);
        assert_eq!(Cell::rgb(255, 0, 0).intensity(), 1.0);
        assert!((Cell::rgb(51, 0, 0).intensity() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_byte_layout_matches_channels() {
        let cells = [Cell::rgb(1, 2, 3), Cell::rgb(4, 5, 6)];
        let bytes: &[u8] = bytemuck::cast_slice(&cells);
        assert_eq!(bytes, &[1, 2, 3, 255, 4, 5, 6, 255]);
    }
}
