//! Transition rules
//!
//! Defines the interface every automaton variant implements, plus the two
//! built-in rules (Life and a two-wire Wireworld). The simulation loop is
//! generic over this trait and never branches on automaton kind; adding a
//! new automaton means adding a rule, not touching the scheduler.

pub mod life;
pub mod wireworld;

pub use life::LifeRule;
pub use wireworld::WireworldRule;

use crate::grid::{Cell, GridBuffer};

/// A per-cell transition function over the previous state
///
/// Implementations must be pure: the next value of `(x, y)` depends only on
/// a fixed-radius neighborhood of `previous` (3x3 Moore in the built-in
/// rules), with no other side effects and no dependency on the order cells
/// are visited. That makes running the rule over all cells safe to
/// parallelize and independent of iteration order.
pub trait TransitionRule {
    /// Compute the next value of cell `(x, y)` from the previous state
    fn next_cell(&self, previous: &GridBuffer, x: i64, y: i64) -> Cell;

    /// Paintable cell values, in the order the host's brush-type control
    /// (and the digit keybindings) list them. Never empty.
    fn brush_values(&self) -> &[Cell];

    /// The value noise seeding sprinkles into the grid
    fn seed_alive(&self) -> Cell;

    /// The value noise seeding fills the rest of the grid with
    fn seed_empty(&self) -> Cell;

    /// Rule name for logs and UI display
    fn name(&self) -> &str;
}
