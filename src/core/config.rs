//! Game configuration.
//!
//! Hosts describe the table (who sits where, optional pacing limits) with a
//! `GameConfig` and hand it to `GameState::new`, which validates it.

use serde::{Deserialize, Serialize};

use super::error::SetupError;
use super::player::{Player, PlayerColor};

/// Fewest players a game supports.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game supports.
pub const MAX_PLAYERS: usize = 5;

/// Index of the last century (centuries run 0..=3).
pub const LAST_CENTURY: u8 = 3;

/// Active cubes each player starts with unless configured otherwise.
pub const DEFAULT_INITIAL_ACTIVE_CUBES: u8 = 5;

/// Total cubes per player for a given player count.
///
/// Returns `None` for unsupported counts.
#[must_use]
pub const fn starting_cubes(player_count: usize) -> Option<u8> {
    match player_count {
        2 | 3 => Some(25),
        4 => Some(22),
        5 => Some(20),
        _ => None,
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seated players, in turn order. The first one starts.
    pub players: Vec<Player>,

    /// Cubes placed in each active reserve at setup; the rest start passive.
    pub initial_active_cubes: u8,

    /// Ends a century after this many turns even if nobody ran dry.
    /// `None` for no limit.
    pub max_turns_per_century: Option<u32>,
}

impl GameConfig {
    /// Create a configuration for the given players.
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            players,
            initial_active_cubes: DEFAULT_INITIAL_ACTIVE_CUBES,
            max_turns_per_century: None,
        }
    }

    /// Seat the first `count` colors with generated names.
    pub fn with_player_count(count: usize) -> Self {
        let players = PlayerColor::ALL
            .iter()
            .take(count)
            .map(|&color| Player::new(color, color.to_string()))
            .collect();
        Self::new(players)
    }

    /// Set the initial active cube count.
    #[must_use]
    pub fn with_initial_active_cubes(mut self, count: u8) -> Self {
        self.initial_active_cubes = count;
        self
    }

    /// Cap the number of turns per century.
    #[must_use]
    pub fn with_max_turns_per_century(mut self, turns: u32) -> Self {
        self.max_turns_per_century = Some(turns);
        self
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Check the configuration and return the per-player cube total.
    pub fn validate(&self) -> Result<u8, SetupError> {
        let count = self.players.len();
        let total = starting_cubes(count).ok_or(SetupError::PlayerCount(count))?;

        for (i, player) in self.players.iter().enumerate() {
            if self.players[..i].iter().any(|p| p.color == player.color) {
                return Err(SetupError::DuplicateColor(player.color));
            }
        }

        if self.initial_active_cubes > total {
            return Err(SetupError::TooManyActiveCubes {
                active: self.initial_active_cubes,
                total,
            });
        }

        Ok(total)
    }
}
