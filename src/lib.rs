//! # rust-citadel
//!
//! Rule engine for a territorial-influence worker-placement board game.
//!
//! ## Design Principles
//!
//! 1. **Pure changes**: every move is a `GameStateChange` value. `apply`
//!    returns a new state and never touches its input, so a host can
//!    preview a change, animate it, then commit it.
//!
//! 2. **Offer, don't check**: the engine only ever offers legal choices
//!    through `PossibleActions`. Executing something that was not offered
//!    is a contract violation and panics.
//!
//! 3. **Uniform driving**: turns, board actions, out-of-turn decisions and
//!    scoring steps are all menus. A host loops on "pick an index".
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: cheap snapshots via `im-rs`.
//!
//! - **Explicit continuations**: a menu carries the change that runs after
//!   its choice, which is how interjections resume the interrupted turn.
//!
//! ## Modules
//!
//! - `core`: colors, leader cards, configuration, errors, messages, RNG
//! - `board`: static topology, tiles and board actions
//! - `state`: the game state model
//! - `changes`: the state-change algebra
//! - `actions`: the action catalog and decision menus
//! - `turn`: turn legality, scoring sequence, interjections
//! - `scoring`: zone, building and reserve scoring
//! - `rules`: the `RulesEngine` seam and the `Game` session

pub mod actions;
pub mod board;
pub mod changes;
pub mod core;
pub mod rules;
pub mod scoring;
pub mod state;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    ArchitectColor, GameConfig, GameRng, InfluenceColor, LeaderCard, Message, MessageKind,
    NoShuffle, PlayError, Player, PlayerColor, SetupError, Shuffler,
};

pub use crate::board::{Board, BoardAction, Location, Tile};

pub use crate::state::{GameState, PlayerState, TileState};

pub use crate::changes::{ArchitectLocation, CubeLocation, GameStateChange};

pub use crate::actions::{GameAction, PossibleActions};

pub use crate::turn::{configure_possible_actions, ScoringPhase};

pub use crate::rules::{ActionRecord, Game, GameResult, Rules, RulesEngine};
