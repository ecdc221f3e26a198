//! Building completion.
//!
//! An architect leaving a tile completes the building under it: every
//! occupied spot empties into the tile's influence zone, the architect
//! moves, and the tile flips with a star token for the architect's owner.
//! Cubes owned by the politic leader's holder are held back; that player
//! chooses their zone out of turn before the rest of the completion runs.

use tracing::trace;

use crate::board::{Board, Location};
use crate::changes::{ArchitectLocation, CubeLocation, GameStateChange};
use crate::core::{InfluenceColor, LeaderCard, PlayerColor};
use crate::state::GameState;
use crate::turn;

/// Architect move, completing the vacated building if there is one.
pub(crate) fn move_architect(
    board: &Board,
    state: &GameState,
    from: ArchitectLocation,
    to: ArchitectLocation,
) -> GameStateChange {
    let architect_move = GameStateChange::move_architect(from, to);
    match from.tile() {
        Some(location) => complete_building(board, state, location, from, architect_move),
        None => architect_move,
    }
}

fn complete_building(
    board: &Board,
    state: &GameState,
    location: Location,
    from: ArchitectLocation,
    architect_move: GameStateChange,
) -> GameStateChange {
    let tile = state.tile(location);
    let cubes_per_spot = board.cubes_per_spot(location);
    let zone = tile.tile.influence;
    let politic = state.holder_of(LeaderCard::POLITIC);

    let mut changes = Vec::with_capacity(5);
    let mut held_back = false;
    for (spot, owner) in tile.occupied_spots() {
        if Some(owner) == politic {
            held_back = true;
            continue;
        }
        changes.push(GameStateChange::move_cubes(
            cubes_per_spot,
            CubeLocation::TileSpot {
                location,
                spot: spot as u8,
                color: owner,
            },
            CubeLocation::Zone { zone, color: owner },
        ));
    }

    changes.push(architect_move);
    changes.push(GameStateChange::FlipTile {
        location,
        star_color: from.architect().player(),
        nb_filled_spots: tile.nb_filled_spots() as u8,
    });
    let completion = GameStateChange::Composite(changes);

    match politic {
        Some(holder) if held_back => {
            trace!(%location, %holder, "politic leader interjects on completion");
            turn::politic_zone_choice(state, location, holder, completion)
        }
        _ => completion,
    }
}

/// Move every spot of `color` on `location` into `zone`.
pub(crate) fn empty_tile_to_zone(
    board: &Board,
    state: &GameState,
    location: Location,
    color: PlayerColor,
    zone: InfluenceColor,
) -> GameStateChange {
    let cubes_per_spot = board.cubes_per_spot(location);
    let moves = state
        .tile(location)
        .occupied_spots()
        .filter(|&(_, owner)| owner == color)
        .map(|(spot, _)| {
            GameStateChange::move_cubes(
                cubes_per_spot,
                CubeLocation::TileSpot {
                    location,
                    spot: spot as u8,
                    color,
                },
                CubeLocation::Zone { zone, color },
            )
        })
        .collect();
    GameStateChange::Composite(moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ArchitectColor, GameConfig, NoShuffle};

    // Location (2, 0): century-0 Military tile, 2 cubes per spot.
    const SITE: Location = Location::new(2, 0);

    fn with_workers(owners: &[PlayerColor]) -> (Board, GameState) {
        let board = Board::standard();
        let state =
            GameState::new(&board, &GameConfig::with_player_count(3), &mut NoShuffle).unwrap();

        let mut changes = vec![GameStateChange::move_architect(
            ArchitectLocation::own_held(PlayerColor::Red),
            ArchitectLocation::Tile {
                location: SITE,
                architect: ArchitectColor::Player(PlayerColor::Red),
            },
        )];
        for (spot, &color) in owners.iter().enumerate() {
            changes.push(GameStateChange::move_cubes(
                2,
                CubeLocation::ActiveReserve(color),
                CubeLocation::TileSpot {
                    location: SITE,
                    spot: spot as u8,
                    color,
                },
            ));
        }
        let state = GameStateChange::Composite(changes).apply(&state);
        (board, state)
    }

    #[test]
    fn test_completion_empties_spots_and_flips() {
        let (board, state) = with_workers(&[PlayerColor::Red, PlayerColor::Green]);
        let next = move_architect(
            &board,
            &state,
            ArchitectLocation::Tile {
                location: SITE,
                architect: ArchitectColor::Player(PlayerColor::Red),
            },
            ArchitectLocation::own_held(PlayerColor::Red),
        )
        .apply(&state);

        let tile = next.tile(SITE);
        assert!(tile.building_facing);
        assert_eq!(tile.stars_of(PlayerColor::Red), 2);
        assert_eq!(next.zone(InfluenceColor::Military).count(PlayerColor::Red), 2);
        assert_eq!(next.zone(InfluenceColor::Military).count(PlayerColor::Green), 2);
        assert!(next.player(PlayerColor::Red).is_holding_architect);
        next.assert_invariants();
    }

    #[test]
    fn test_empty_tile_completion_has_no_star() {
        let (board, state) = with_workers(&[]);
        let next = move_architect(
            &board,
            &state,
            ArchitectLocation::Tile {
                location: SITE,
                architect: ArchitectColor::Player(PlayerColor::Red),
            },
            ArchitectLocation::own_held(PlayerColor::Red),
        )
        .apply(&state);

        assert!(next.tile(SITE).building_facing);
        assert_eq!(next.tile(SITE).star, None);
    }

    #[test]
    fn test_politic_holder_cubes_are_held_back() {
        let (board, state) = with_workers(&[PlayerColor::Red, PlayerColor::Blue]);
        let state = GameStateChange::TakeLeaderCard {
            color: PlayerColor::Blue,
            card: LeaderCard::POLITIC,
        }
        .apply(&state);

        let change = move_architect(
            &board,
            &state,
            ArchitectLocation::Tile {
                location: SITE,
                architect: ArchitectColor::Player(PlayerColor::Red),
            },
            ArchitectLocation::own_held(PlayerColor::Red),
        );

        let menu = change.queued_menu().unwrap();
        assert_eq!(menu.nb_actions(), InfluenceColor::ALL.len());

        // Nothing moves before Blue chooses.
        let next = change.apply(&state);
        assert_eq!(next.current_color(), PlayerColor::Blue);
        assert_eq!(next.tile(SITE).nb_filled_spots(), 2);
    }

    #[test]
    fn test_empty_tile_to_zone_moves_only_owner() {
        let (board, state) =
            with_workers(&[PlayerColor::Blue, PlayerColor::Red, PlayerColor::Blue]);
        let blue = PlayerColor::Blue;
        let next =
            empty_tile_to_zone(&board, &state, SITE, blue, InfluenceColor::Citadel).apply(&state);

        assert_eq!(next.zone(InfluenceColor::Citadel).count(PlayerColor::Blue), 4);
        assert_eq!(next.tile(SITE).spots, [None, Some(PlayerColor::Red), None]);
    }

    struct Reversed;

    impl crate::core::Shuffler for Reversed {
        fn shuffle_tiles(&mut self, tiles: &mut [crate::board::Tile]) {
            tiles.reverse();
        }
    }

    #[test]
    fn test_completion_follows_tile_influence() {
        // Unshuffled, this location gets a Military tile; reversed, an Economic one.
        let board = Board::standard();
        let config = GameConfig::with_player_count(3);
        let state = GameState::new(&board, &config, &mut Reversed).unwrap();
        assert_eq!(state.tile(SITE).tile.influence, InfluenceColor::Economic);

        let red = ArchitectLocation::Tile {
            location: SITE,
            architect: ArchitectColor::Player(PlayerColor::Red),
        };
        let setup = GameStateChange::Composite(vec![
            GameStateChange::move_architect(ArchitectLocation::own_held(PlayerColor::Red), red),
            GameStateChange::move_cubes(
                2,
                CubeLocation::ActiveReserve(PlayerColor::Green),
                CubeLocation::TileSpot {
                    location: SITE,
                    spot: 0,
                    color: PlayerColor::Green,
                },
            ),
        ]);
        let state = setup.apply(&state);

        let held = ArchitectLocation::own_held(PlayerColor::Red);
        let next = move_architect(&board, &state, red, held).apply(&state);
        assert_eq!(next.zone(InfluenceColor::Economic).count(PlayerColor::Green), 2);
        assert_eq!(next.zone(InfluenceColor::Military).count(PlayerColor::Green), 0);
    }
}
