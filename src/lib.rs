// src/lib.rs
//! Lattice Loop
//!
//! An interactive cellular-automaton engine: double-buffered toroidal grids,
//! pluggable transition rules (Life and a two-wire Wireworld built in),
//! signed-rate frame scheduling and brush editing. Rendering, UI, input
//! capture and image decoding are the host's job; the engine consumes a
//! per-frame snapshot of control and pointer state and hands back raw
//! channel bytes plus a redraw request.

pub mod brush;
pub mod engine;
pub mod error;
pub mod grid;
pub mod rule;
pub mod scheduler;

// Re-export main types for convenience
pub use engine::{ControlState, FrameInput, PointerState, RenderPolicy, Seed, SimulationLoop};
pub use error::EngineError;
pub use grid::{Cell, DoubleBuffer, GridBuffer};
pub use rule::{LifeRule, TransitionRule, WireworldRule};

/// Creates a noise-seeded Life engine at the given grid side
pub fn life(side: usize) -> Result<SimulationLoop<LifeRule>, EngineError> {
    SimulationLoop::new(LifeRule, side, Seed::noise())
}

/// Creates a Wireworld engine over an initially empty grid
///
/// Wireworld starts from drawn circuitry rather than noise, so the grid
/// begins blank and the host paints wires with the brush.
pub fn wireworld(side: usize) -> Result<SimulationLoop<WireworldRule>, EngineError> {
    SimulationLoop::new(
        WireworldRule,
        side,
        Seed::Uniform(WireworldRule::EMPTY),
    )
}
