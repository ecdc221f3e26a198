//! Host-boundary errors.
//!
//! Only setup and host driving can fail recoverably. Broken preconditions
//! inside the rule engine are programming errors and panic instead.

use thiserror::Error;

use super::PlayerColor;

/// Invalid game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("a game needs 2 to 5 players, got {0}")]
    PlayerCount(usize),
    #[error("color {0} is seated twice")]
    DuplicateColor(PlayerColor),
    #[error("{active} initial active cubes exceed the {total} starting cubes")]
    TooManyActiveCubes { active: u8, total: u8 },
    #[error("tile deck holds {tiles} tiles for {locations} board locations")]
    DeckSize { tiles: usize, locations: usize },
}

/// A host asked the session for something the current state cannot give.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("no decision is pending")]
    NoPendingDecision,
    #[error("action index {index} out of range ({available} available)")]
    IndexOutOfRange { index: usize, available: usize },
    #[error("replay diverged at record {record}: expected {expected} to act, found {found}")]
    ReplayDiverged {
        record: usize,
        expected: PlayerColor,
        found: PlayerColor,
    },
    #[error(transparent)]
    Setup(#[from] SetupError),
}
