//! Century-end scoring.
//!
//! Each function returns the `GameStateChange` for one scoring phase,
//! computed from the state before that phase. Order is driven by
//! [`ScoringPhase`](crate::turn::ScoringPhase).

mod buildings;
mod zones;

pub use buildings::{
    building_groups, building_score, score_buildings, score_incomplete_buildings, star_value,
    BuildingGroup,
};
pub use zones::{cascade_size, score_zone, MAX_CASCADE};

use crate::changes::GameStateChange;
use crate::state::GameState;

/// Each player scores half their active cubes, rounded down.
#[must_use]
pub fn score_active_cubes(state: &GameState) -> GameStateChange {
    let changes = state
        .players()
        .iter()
        .filter_map(|player| {
            let amount = u32::from(player.nb_active_cubes / 2);
            (amount > 0).then_some(GameStateChange::ScorePoints {
                color: player.color(),
                amount,
            })
        })
        .collect();
    GameStateChange::Composite(changes)
}
