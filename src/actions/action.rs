//! The action catalog.
//!
//! Each `GameAction` is a small policy value: given the board and the
//! current state it produces the `GameStateChange` that carries it out.
//! Execution is pure; only offered actions may be executed.

use serde::{Deserialize, Serialize};

use super::board_menu;
use super::building;
use crate::board::{Board, BoardAction, Location};
use crate::changes::{ArchitectLocation, CubeLocation, GameStateChange, Reserve};
use crate::core::{ArchitectColor, InfluenceColor, LeaderCard, Message, PlayerColor};
use crate::state::{GameState, NB_SPOTS};
use crate::turn::{self, ScoringPhase};

/// A selectable action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Move an architect; leaving a tile completes its building.
    MoveArchitect {
        from: ArchitectLocation,
        to: ArchitectLocation,
    },

    /// Commit one spot's worth of active cubes to a tile.
    SendWorkers { location: Location, color: PlayerColor },

    SendCubesToZone {
        color: PlayerColor,
        source: Reserve,
        zone: InfluenceColor,
        count: u8,
    },

    MoveCubesBetweenZones {
        color: PlayerColor,
        from: InfluenceColor,
        to: InfluenceColor,
        count: u8,
    },

    /// Passive to active.
    ActivateCubes { color: PlayerColor, count: u8 },

    TakeLeaderCard { color: PlayerColor, card: LeaderCard },

    TakeNeutralArchitect { color: PlayerColor },

    /// Add a star to the token on `location`.
    IncreaseStarToken { location: Location },

    /// Pick one branch of an `Either` board action.
    SelectBoardAction {
        color: PlayerColor,
        action: BoardAction,
    },

    /// Politic leader: send one's cubes on a completing tile to `zone`.
    EmptyTileToZone {
        location: Location,
        color: PlayerColor,
        zone: InfluenceColor,
    },

    ScoringStep(ScoringPhase),

    /// A message with a fixed follow-up, such as skipping a board action.
    Explicit {
        message: Message,
        follow_up: Box<GameStateChange>,
    },
}

impl GameAction {
    /// An action doing nothing beyond its message.
    #[must_use]
    pub fn explicit(message: Message) -> Self {
        GameAction::Explicit {
            message,
            follow_up: Box::new(GameStateChange::none()),
        }
    }

    /// The change carrying out this action on `state`.
    #[must_use]
    pub fn execute(&self, board: &Board, state: &GameState) -> GameStateChange {
        match self {
            GameAction::MoveArchitect { from, to } => {
                building::move_architect(board, state, *from, *to)
            }

            GameAction::SendWorkers { location, color } => {
                send_workers(board, state, *location, *color)
            }

            GameAction::SendCubesToZone {
                color,
                source,
                zone,
                count,
            } => GameStateChange::move_cubes(
                *count,
                CubeLocation::reserve(*source, *color),
                CubeLocation::Zone {
                    zone: *zone,
                    color: *color,
                },
            ),

            GameAction::MoveCubesBetweenZones {
                color,
                from,
                to,
                count,
            } => GameStateChange::move_cubes(
                *count,
                CubeLocation::Zone {
                    zone: *from,
                    color: *color,
                },
                CubeLocation::Zone {
                    zone: *to,
                    color: *color,
                },
            ),

            GameAction::ActivateCubes { color, count } => GameStateChange::move_cubes(
                *count,
                CubeLocation::PassiveReserve(*color),
                CubeLocation::ActiveReserve(*color),
            ),

            GameAction::TakeLeaderCard { color, card } => take_leader_card(state, *color, *card),

            GameAction::TakeNeutralArchitect { color } => GameStateChange::move_architect(
                ArchitectLocation::OffBoard,
                ArchitectLocation::Held {
                    holder: *color,
                    architect: ArchitectColor::Neutral,
                },
            ),

            GameAction::IncreaseStarToken { location } => match state.tile(*location).star {
                Some(star) => GameStateChange::IncreaseStarToken {
                    location: *location,
                    color: star.color,
                    new_count: star.nb_stars + 1,
                },
                None => panic!("no star token on {location}"),
            },

            GameAction::SelectBoardAction { color, action } => {
                GameStateChange::queue(board_menu::sub_action_menu(state, *color, action))
            }

            GameAction::EmptyTileToZone {
                location,
                color,
                zone,
            } => building::empty_tile_to_zone(board, state, *location, *color, *zone),

            GameAction::ScoringStep(phase) => turn::scoring_step(board, state, *phase),

            GameAction::Explicit { follow_up, .. } => follow_up.as_ref().clone(),
        }
    }
}

fn send_workers(
    board: &Board,
    state: &GameState,
    location: Location,
    color: PlayerColor,
) -> GameStateChange {
    let spot = match state.tile(location).next_empty_spot() {
        Some(spot) => spot,
        None => panic!("tile {location} has no empty spot"),
    };
    let placement = GameStateChange::move_cubes(
        board.cubes_per_spot(location),
        CubeLocation::ActiveReserve(color),
        CubeLocation::TileSpot {
            location,
            spot: spot as u8,
            color,
        },
    );

    if spot + 1 < NB_SPOTS {
        return placement;
    }

    let projected = placement.apply(state);
    let menu = board_menu::board_action_menu(board, &projected, location, color);
    placement.then(GameStateChange::queue(menu))
}

fn take_leader_card(state: &GameState, color: PlayerColor, card: LeaderCard) -> GameStateChange {
    let player = state.player(color);
    let mut changes = vec![GameStateChange::TakeLeaderCard { color, card }];

    let holders = u8::try_from(state.nb_leader_holders()).unwrap_or(u8::MAX);
    let activated = holders.min(player.nb_passive_cubes);
    if activated > 0 {
        changes.push(GameStateChange::move_cubes(
            activated,
            CubeLocation::PassiveReserve(color),
            CubeLocation::ActiveReserve(color),
        ));
    }

    if card == LeaderCard::RELIGIOUS {
        let active = player.nb_active_cubes + activated;
        let passive = player.nb_passive_cubes - activated;
        let from_active = LeaderCard::RELIGIOUS_CITADEL_CUBES.min(active);
        let from_passive = (LeaderCard::RELIGIOUS_CITADEL_CUBES - from_active).min(passive);
        let citadel = CubeLocation::Zone {
            zone: InfluenceColor::Citadel,
            color,
        };

        for (count, reserve) in [(from_active, Reserve::Active), (from_passive, Reserve::Passive)] {
            if count > 0 {
                changes.push(GameStateChange::move_cubes(
                    count,
                    CubeLocation::reserve(reserve, color),
                    citadel,
                ));
            }
        }
    }

    GameStateChange::Composite(changes)
}
