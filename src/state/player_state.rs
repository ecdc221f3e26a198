//! Per-player mutable record.

use serde::{Deserialize, Serialize};

use crate::core::{LeaderCard, Player, PlayerColor};

/// A seated player's state.
///
/// Active and passive cubes are separate pools: passive cubes must be
/// activated before most actions can spend them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub player: Player,
    pub nb_active_cubes: u8,
    pub nb_passive_cubes: u8,
    pub is_current_player: bool,
    /// The player's own architect is in their zone rather than on a tile.
    pub is_holding_architect: bool,
    pub is_holding_neutral_architect: bool,
    pub leader_card: Option<LeaderCard>,
    pub score: u32,
}

impl PlayerState {
    /// Fresh player at setup: holding their architect, no leader, no score.
    #[must_use]
    pub fn new(player: Player, nb_active_cubes: u8, nb_passive_cubes: u8) -> Self {
        Self {
            player,
            nb_active_cubes,
            nb_passive_cubes,
            is_current_player: false,
            is_holding_architect: true,
            is_holding_neutral_architect: false,
            leader_card: None,
            score: 0,
        }
    }

    #[must_use]
    pub fn color(&self) -> PlayerColor {
        self.player.color
    }

    /// Cubes in the active and passive reserves.
    #[must_use]
    pub fn reserve_cubes(&self) -> u8 {
        self.nb_active_cubes + self.nb_passive_cubes
    }

    /// Does this player hold the given leader card?
    #[must_use]
    pub fn holds(&self, card: LeaderCard) -> bool {
        self.leader_card == Some(card)
    }
}
