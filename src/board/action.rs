//! Fixed board actions.
//!
//! Every board location carries one board action, triggered for the player
//! who fills the last spot of the tile on that location.

use serde::{Deserialize, Serialize};

use crate::core::InfluenceColor;

/// A board action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardAction {
    /// Send 1 to `nb_cubes` cubes, from the active or passive reserve, to a zone.
    Influence { zone: InfluenceColor, nb_cubes: u8 },

    /// Activate up to `nb_cubes` passive cubes.
    Activate { nb_cubes: u8 },

    /// Move up to `nb_cubes` of one's cubes from one zone to another.
    Transfer { nb_cubes: u8 },

    /// Add a star to one of one's 1- or 2-star tokens.
    Star,

    /// Take the neutral architect if it is off the board.
    NeutralArchitect,

    /// Perform one of two sub-actions.
    Either(Box<BoardAction>, Box<BoardAction>),
}

impl BoardAction {
    /// Choice between two sub-actions.
    #[must_use]
    pub fn either(first: BoardAction, second: BoardAction) -> Self {
        BoardAction::Either(Box::new(first), Box::new(second))
    }
}

/// Per-location metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardActionInfo {
    pub action: BoardAction,
    /// Cubes committed by each worker placement on this location.
    pub cubes_per_spot: u8,
}

impl BoardActionInfo {
    #[must_use]
    pub fn new(action: BoardAction, cubes_per_spot: u8) -> Self {
        assert!(
            (1..=3).contains(&cubes_per_spot),
            "cubes per spot must be 1-3, got {cubes_per_spot}"
        );
        Self {
            action,
            cubes_per_spot,
        }
    }
}
