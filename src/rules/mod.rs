//! Host surface.
//!
//! - `RulesEngine`: the trait a host drives (pending menu, execute, commit,
//!   terminal check)
//! - `Rules`: the engine over a shared board
//! - `Game`: a session keeping state plus a replayable choice history
//!
//! The rule engine itself never formats text, touches I/O or picks moves.

pub mod engine;
pub mod session;

pub use engine::{GameResult, Rules, RulesEngine};
pub use session::{ActionRecord, Game};
