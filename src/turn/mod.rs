//! Turn and phase state machine.
//!
//! ```text
//! Turn(player) --(century over)--> Scoring(Init .. Buildings)
//!     Scoring --> PrepareNextCentury --> Turn(next player)
//!     Scoring --> FinishGame (after the last century)
//! ```
//!
//! - `configure`: the legality policy for a fresh turn
//! - `phase`: the scoring sequence, one single-entry menu per step
//! - `interjection`: out-of-turn decisions with an explicit continuation

mod configure;
mod interjection;
mod phase;

pub use configure::{configure_possible_actions, turn_menu};
pub use interjection::{interject, politic_zone_choice};
pub use phase::{scoring_menu, scoring_step, ScoringPhase};
