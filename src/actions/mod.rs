//! Actions and decision menus.
//!
//! - `GameAction`: the closed catalog of things a player can choose to do
//! - `PossibleActions`: the branching menu a player chooses from
//!
//! Actions never mutate state. `execute` turns a choice into a
//! [`GameStateChange`](crate::changes::GameStateChange); the host previews
//! and applies it.

mod action;
mod board_menu;
mod building;
mod possible;

pub use action::GameAction;
pub use possible::{MenuEntry, PossibleActions};
