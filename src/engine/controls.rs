//! Per-frame control and pointer snapshots
//!
//! The engine owns no ambient UI or input state. The host samples its
//! control panel and pointer once per frame and hands the loop an immutable
//! snapshot, which keeps the core independently testable and free of event
//! subscriptions.

use cgmath::Vector2;

use crate::error::EngineError;

/// Control-panel surface owned by the host UI
///
/// Defaults mirror the reference setup: running, rate -4 (one step every
/// five frames) on a 64-cell grid.
#[derive(Debug, Clone, Copy)]
pub struct ControlState {
    /// Whether automatic stepping is enabled; the brush works either way
    pub running: bool,
    /// Signed speed control, typically -9..=15
    pub rate: i32,
    /// Brush radius in grid cells
    pub brush_width: f32,
    /// Index into the rule's `brush_values()`, clamped when out of range
    pub brush_index: usize,
    /// log2 of the grid side; changing it is a reseed trigger for the host
    pub side_log2: u32,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            running: true,
            rate: -4,
            brush_width: 3.2,
            brush_index: 0,
            side_log2: 6,
        }
    }
}

impl ControlState {
    /// Validate the fields the engine cannot tolerate
    ///
    /// Construction-time check for hosts that forward raw UI values; the
    /// per-frame path assumes this has been done.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.brush_width <= 0.0 {
            return Err(EngineError::InvalidBrushWidth(self.brush_width));
        }
        if self.side() == 0 {
            return Err(EngineError::InvalidSide(0));
        }
        Ok(())
    }

    /// Grid side length implied by `side_log2`, or 0 if the shift overflows
    pub fn side(&self) -> usize {
        1usize.checked_shl(self.side_log2).unwrap_or(0)
    }

    /// Apply a single-key command, returning true if the key was bound
    ///
    /// Space toggles `running`; digits 1-9 select a brush value by index
    /// (clamped to the rule's palette length). The host resolves raw key
    /// events down to characters before calling this.
    pub fn apply_key(&mut self, key: char, palette_len: usize) -> bool {
        match key {
            ' ' => {
                self.running = !self.running;
                true
            }
            '1'..='9' => {
                let index = key as usize - '1' as usize;
                self.brush_index = index.min(palette_len.saturating_sub(1));
                true
            }
            _ => false,
        }
    }
}

/// Latest known pointer state, sampled by the host input collaborator
#[derive(Debug, Clone, Copy)]
pub struct PointerState {
    /// Position normalized to `[0, 1]^2` over the grid
    pub position: Vector2<f32>,
    /// True while the primary button is held; painting happens every frame
    pub pressed: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Vector2::new(0.5, 0.5),
            pressed: false,
        }
    }
}

/// Everything the simulation loop consumes for one presented frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub controls: ControlState,
    pub pointer: PointerState,
}
