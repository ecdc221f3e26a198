//! Influence zone scoring.

use crate::changes::{CubeLocation, GameStateChange};
use crate::core::{InfluenceColor, PlayerColor};
use crate::state::GameState;

/// Most cubes a majority holder can cascade out of one zone.
pub const MAX_CASCADE: u8 = 5;

/// Cubes each majority holder cascades for a zone maximum of `max`.
#[must_use]
pub const fn cascade_size(max: u8) -> u8 {
    let half = max / 2;
    if half < MAX_CASCADE {
        half
    } else {
        MAX_CASCADE
    }
}

/// Score one zone.
///
/// Every player scores their cube count. Then every player tied at the
/// maximum moves [`cascade_size`] cubes into the next zone, or back to their
/// active reserve from the citadel. Scores come from the pre-cascade counts;
/// all `ScorePoints` precede the moves.
#[must_use]
pub fn score_zone(state: &GameState, zone: InfluenceColor) -> GameStateChange {
    let bank = state.zone(zone);
    let counts: Vec<(PlayerColor, u8)> = state.colors().map(|c| (c, bank.count(c))).collect();

    let mut changes: Vec<GameStateChange> = counts
        .iter()
        .filter(|&&(_, count)| count > 0)
        .map(|&(color, count)| GameStateChange::ScorePoints {
            color,
            amount: u32::from(count),
        })
        .collect();

    let max = counts.iter().map(|&(_, count)| count).max().unwrap_or(0);
    let cascade = cascade_size(max);
    if cascade > 0 {
        for &(color, _) in counts.iter().filter(|&&(_, count)| count == max) {
            let to = match zone.next() {
                Some(next) => CubeLocation::Zone { zone: next, color },
                None => CubeLocation::ActiveReserve(color),
            };
            changes.push(GameStateChange::move_cubes(
                cascade,
                CubeLocation::Zone { zone, color },
                to,
            ));
        }
    }

    GameStateChange::Composite(changes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::{GameConfig, NoShuffle};

    fn with_zone(zone: InfluenceColor, counts: &[(PlayerColor, u8)]) -> GameState {
        let board = Board::standard();
        let state =
            GameState::new(&board, &GameConfig::with_player_count(3), &mut NoShuffle).unwrap();
        let moves = counts
            .iter()
            .map(|&(color, count)| {
                GameStateChange::move_cubes(
                    count,
                    CubeLocation::PassiveReserve(color),
                    CubeLocation::Zone { zone, color },
                )
            })
            .collect();
        GameStateChange::Composite(moves).apply(&state)
    }

    #[test]
    fn test_cascade_size() {
        assert_eq!(cascade_size(0), 0);
        assert_eq!(cascade_size(1), 0);
        assert_eq!(cascade_size(7), 3);
        assert_eq!(cascade_size(10), 5);
        assert_eq!(cascade_size(15), 5);
    }

    #[test]
    fn test_scores_then_cascades() {
        let state = with_zone(
            InfluenceColor::Military,
            &[(PlayerColor::Red, 6), (PlayerColor::Green, 2)],
        );
        let change = score_zone(&state, InfluenceColor::Military);

        let atomic = change.atomic_changes();
        assert_eq!(atomic.len(), 3);
        assert!(matches!(atomic[2], GameStateChange::MoveCubes { count: 3, .. }));

        let next = change.apply(&state);
        assert_eq!(next.player(PlayerColor::Red).score, 6);
        assert_eq!(next.player(PlayerColor::Green).score, 2);
        assert_eq!(next.zone(InfluenceColor::Military).count(PlayerColor::Red), 3);
        assert_eq!(next.zone(InfluenceColor::Politic).count(PlayerColor::Red), 3);
    }

    #[test]
    fn test_citadel_cascades_to_active_reserve() {
        let state = with_zone(InfluenceColor::Citadel, &[(PlayerColor::Blue, 4)]);
        let next = score_zone(&state, InfluenceColor::Citadel).apply(&state);

        assert_eq!(next.zone(InfluenceColor::Citadel).count(PlayerColor::Blue), 2);
        assert_eq!(next.player(PlayerColor::Blue).nb_active_cubes, 7);
    }

    #[test]
    fn test_single_cube_does_not_cascade() {
        let state = with_zone(InfluenceColor::Religious, &[(PlayerColor::Red, 1)]);
        let change = score_zone(&state, InfluenceColor::Religious);
        assert_eq!(change.atomic_changes().len(), 1);
    }

    #[test]
    fn test_empty_zone_is_noop() {
        let state = with_zone(InfluenceColor::Economic, &[]);
        assert!(score_zone(&state, InfluenceColor::Economic).is_empty());
    }
}
