//! Simulation loop
//!
//! Orchestrates one presented frame: ask the scheduler how many steps to
//! run, drive the transition rule over the double buffer for each of them,
//! apply the brush on top, and tell the host whether a redraw is warranted.
//! Everything happens synchronously inside the frame; consistency comes from
//! the double buffer's structure, not from locks.

pub mod controls;
pub mod seed;

pub use controls::{ControlState, FrameInput, PointerState};
pub use seed::Seed;

use log::info;
use rand::Rng;

use crate::brush::{self, BrushStroke};
use crate::error::EngineError;
use crate::grid::{DoubleBuffer, GridBuffer};
use crate::rule::TransitionRule;
use crate::scheduler::iterations_this_frame;

/// When the loop asks the presentation collaborator to redraw
///
/// `OnChange` is the default: the render request fires only on frames where
/// a step ran or the brush painted, and resets every frame. `EveryFrame` is
/// the documented simplification some hosts prefer (redraw unconditionally);
/// it never affects simulation semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPolicy {
    #[default]
    OnChange,
    EveryFrame,
}

/// What one call to [`SimulationLoop::advance_frame`] did
#[derive(Debug, Clone, Copy)]
pub struct FrameOutput {
    /// Simulation steps executed this frame (0 when paused or skipping)
    pub steps_run: u32,
    /// Whether the brush wrote into the grid this frame
    pub painted: bool,
    /// Whether the host should redraw from [`SimulationLoop::current`]
    pub render_requested: bool,
}

/// The frame-driven simulation engine
///
/// Owns the double buffer and the counters; commits to exactly one
/// transition rule for its lifetime (a construction-time type parameter,
/// never a runtime branch). The host calls [`advance_frame`] once per
/// presented frame with a snapshot of its control surface and pointer.
///
/// [`advance_frame`]: SimulationLoop::advance_frame
pub struct SimulationLoop<R: TransitionRule> {
    rule: R,
    buffers: DoubleBuffer,
    tick: u64,
    frame_counter: u64,
    render_policy: RenderPolicy,
}

impl<R: TransitionRule> SimulationLoop<R> {
    /// Build an engine over a freshly seeded `side * side` grid
    pub fn new(rule: R, side: usize, seed: Seed) -> Result<Self, EngineError> {
        let front = seed.build_grid(side, rule.seed_alive(), rule.seed_empty())?;
        Self::from_front_grid(rule, front)
    }

    /// Like [`new`](SimulationLoop::new) but with a caller-supplied RNG,
    /// so noise-seeded runs can be reproduced exactly
    pub fn new_with_rng<G: Rng>(
        rule: R,
        side: usize,
        seed: Seed,
        rng: &mut G,
    ) -> Result<Self, EngineError> {
        let front = seed.build_grid_with_rng(side, rule.seed_alive(), rule.seed_empty(), rng)?;
        Self::from_front_grid(rule, front)
    }

    fn from_front_grid(rule: R, front: GridBuffer) -> Result<Self, EngineError> {
        let side = front.side();
        let buffers = DoubleBuffer::from_grid(front)?;
        info!("{} engine ready on a {side}x{side} grid", rule.name());
        Ok(Self {
            rule,
            buffers,
            tick: 0,
            frame_counter: 0,
            render_policy: RenderPolicy::default(),
        })
    }

    /// Select the render-request policy (builder style)
    pub fn with_render_policy(mut self, policy: RenderPolicy) -> Self {
        self.render_policy = policy;
        self
    }

    /// Run one presented frame against a control/pointer snapshot
    ///
    /// Order within the frame is fixed: all scheduled rule steps complete
    /// (each followed by a buffer swap) before the brush writes, so user
    /// edits land on top of the newest state and are never clobbered by the
    /// automatic step. The frame counter advances unconditionally, paused or
    /// not, which keeps the slow-rate phase intact across a pause; pausing
    /// never queues missed ticks.
    pub fn advance_frame(&mut self, input: &FrameInput) -> FrameOutput {
        let iterations = iterations_this_frame(input.controls.rate, self.frame_counter);

        let mut steps_run = 0;
        if input.controls.running {
            for _ in 0..iterations {
                self.step_once();
            }
            steps_run = iterations;
        }

        let painted = input.pointer.pressed;
        if painted {
            let stroke = BrushStroke {
                center: input.pointer.position,
                width: input.controls.brush_width,
                value: self.brush_value(input.controls.brush_index),
            };
            brush::paint(self.buffers.current_mut(), &stroke);
        }

        self.frame_counter += 1;

        let changed = steps_run > 0 || painted;
        FrameOutput {
            steps_run,
            painted,
            render_requested: match self.render_policy {
                RenderPolicy::OnChange => changed,
                RenderPolicy::EveryFrame => true,
            },
        }
    }

    /// One full-grid rule step followed by a role swap
    fn step_once(&mut self) {
        let side = self.buffers.side() as i64;
        let (previous, next) = self.buffers.step_views();
        for y in 0..side {
            for x in 0..side {
                next.write(x, y, self.rule.next_cell(previous, x, y));
            }
        }
        self.buffers.swap();
        self.tick += 1;
    }

    /// Resolve a brush index against the rule's palette, clamping overruns
    fn brush_value(&self, index: usize) -> crate::grid::Cell {
        let values = self.rule.brush_values();
        values[index.min(values.len() - 1)]
    }

    /// Replace the grid contents between frames
    ///
    /// The replacement buffer is fully built and validated before anything
    /// is swapped in, so a failing seed (wrong payload length, zero side)
    /// leaves the running state untouched. On success the old contents are
    /// discarded entirely and the tick counter restarts; the frame counter
    /// keeps running since it belongs to the presentation cadence, not the
    /// simulation.
    pub fn reseed(&mut self, side: usize, seed: Seed) -> Result<(), EngineError> {
        let front = seed.build_grid(side, self.rule.seed_alive(), self.rule.seed_empty())?;
        self.install_front_grid(front)
    }

    /// [`reseed`](SimulationLoop::reseed) with a caller-supplied RNG
    pub fn reseed_with_rng<G: Rng>(
        &mut self,
        side: usize,
        seed: Seed,
        rng: &mut G,
    ) -> Result<(), EngineError> {
        let front = seed.build_grid_with_rng(side, self.rule.seed_alive(), self.rule.seed_empty(), rng)?;
        self.install_front_grid(front)
    }

    fn install_front_grid(&mut self, front: GridBuffer) -> Result<(), EngineError> {
        let side = front.side();
        self.buffers = DoubleBuffer::from_grid(front)?;
        self.tick = 0;
        info!("{} engine reseeded to a {side}x{side} grid", self.rule.name());
        Ok(())
    }

    /// The buffer holding the most recently completed state
    ///
    /// This is what the presentation collaborator reads (see
    /// [`GridBuffer::as_bytes`]) and what the next frame's steps start from.
    pub fn current(&self) -> &GridBuffer {
        self.buffers.current()
    }

    /// Simulation steps executed since construction or the last reseed
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Presented frames seen since construction
    pub fn frame_counter(&self) -> u64 {
        self.frame_counter
    }

    /// Grid side length
    pub fn side(&self) -> usize {
        self.buffers.side()
    }

    /// The rule this engine committed to at construction
    pub fn rule(&self) -> &R {
        &self.rule
    }
}
