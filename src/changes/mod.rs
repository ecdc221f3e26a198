//! State-change algebra.
//!
//! Changes are atomic, composable deltas. Every mutation of a `GameState`
//! goes through [`GameStateChange::apply`], which returns a new state and
//! leaves its input untouched. Consumers (the renderer, tests) walk changes
//! with an exhaustive `match` or [`GameStateChange::for_each_atomic`].

mod change;
mod location;

pub use change::GameStateChange;
pub use location::{ArchitectLocation, CubeLocation, Reserve};
