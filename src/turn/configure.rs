//! Turn menus.
//!
//! `configure_possible_actions` decides what the current player may do when
//! no decision is pending. Policy, first match wins:
//!
//! 1. Game over: nothing.
//! 2. The player has no cubes left in reserve, or the century's turn limit
//!    is reached: begin scoring.
//! 3. After the first century, a player still holding their architect must
//!    place it first.
//! 4. Otherwise: send workers, send one active cube to a zone, move an
//!    architect, or take a leader card.
//! 5. A player with none of these has nothing to spend: begin scoring.
//!
//! Every turn choice ends with `NextPlayer`, carried as the continuation of
//! the sub-menu it was picked from.

use tracing::trace;

use super::phase::{scoring_menu, ScoringPhase};
use crate::actions::{GameAction, PossibleActions};
use crate::board::Board;
use crate::changes::{ArchitectLocation, GameStateChange, Reserve};
use crate::core::{ArchitectColor, InfluenceColor, Message, MessageKind, PlayerColor};
use crate::state::{GameState, NeutralArchitect};

/// Copy of `state` with its turn menu installed.
#[must_use]
pub fn configure_possible_actions(board: &Board, state: &GameState) -> GameState {
    state.with_possible_actions(turn_menu(board, state))
}

/// The menu for the current player, or `None` once the game is over.
#[must_use]
pub fn turn_menu(board: &Board, state: &GameState) -> Option<PossibleActions> {
    if state.is_over() {
        return None;
    }

    let player = state.current_player();
    let color = player.color();

    let turn_limit_reached = state
        .max_turns_per_century()
        .is_some_and(|limit| state.century_turns() >= limit);
    if player.reserve_cubes() == 0 || turn_limit_reached {
        trace!(%color, century = state.century(), "century over");
        return Some(scoring_menu(state, ScoringPhase::Init));
    }

    if state.century() > 0 && player.is_holding_architect {
        let placements = architect_moves(state, color);
        if !placements.is_empty() {
            return Some(
                placements.with_message(Message::for_player(MessageKind::ReturnArchitect, color)),
            );
        }
    }

    let menu = PossibleActions::composite(vec![
        send_workers_menu(board, state, color),
        send_cube_menu(state, color),
        architect_moves(state, color),
        leader_menu(state, color),
    ]);

    if menu.is_empty() {
        trace!(%color, century = state.century(), "nothing left to spend, century over");
        return Some(scoring_menu(state, ScoringPhase::Init));
    }

    let menu = menu.with_message(Message::for_player(MessageKind::ChooseTurnAction, color));
    trace!(%color, nb_actions = menu.nb_actions(), "turn menu");
    Some(menu)
}

fn send_workers_menu(board: &Board, state: &GameState, color: PlayerColor) -> PossibleActions {
    let active = state.player(color).nb_active_cubes;
    let actions = state
        .tiles()
        .iter()
        .filter(|tile| tile.accepts_workers() && active >= board.cubes_per_spot(tile.location))
        .map(|tile| GameAction::SendWorkers {
            location: tile.location,
            color,
        })
        .collect();

    PossibleActions::new(actions)
        .with_message(Message::for_player(MessageKind::SendWorkers, color))
        .with_continuation(GameStateChange::next_player())
}

fn send_cube_menu(state: &GameState, color: PlayerColor) -> PossibleActions {
    if state.player(color).nb_active_cubes == 0 {
        return PossibleActions::default();
    }
    let actions = InfluenceColor::ALL
        .into_iter()
        .map(|zone| GameAction::SendCubesToZone {
            color,
            source: Reserve::Active,
            zone,
            count: 1,
        })
        .collect();

    PossibleActions::new(actions)
        .with_message(Message::for_player(MessageKind::SendCubeToZone, color))
        .with_continuation(GameStateChange::next_player())
}

fn leader_menu(state: &GameState, color: PlayerColor) -> PossibleActions {
    if state.player(color).leader_card.is_some() {
        return PossibleActions::default();
    }
    let actions = state
        .leader_cards()
        .iter()
        .map(|&card| GameAction::TakeLeaderCard { color, card })
        .collect();

    PossibleActions::new(actions)
        .with_message(Message::for_player(MessageKind::TakeLeaderCard, color))
        .with_continuation(GameStateChange::next_player())
}

/// Every architect move open to `color`, grouped by architect.
fn architect_moves(state: &GameState, color: PlayerColor) -> PossibleActions {
    let century = state.century();
    let own = ArchitectColor::Player(color);
    let open_tiles: Vec<_> = state
        .tiles()
        .iter()
        .filter(|tile| tile.accepts_architect(century))
        .map(|tile| tile.location)
        .collect();

    let to_open_tiles = |from: ArchitectLocation, architect: ArchitectColor| -> Vec<GameAction> {
        open_tiles
            .iter()
            .map(|&location| GameAction::MoveArchitect {
                from,
                to: ArchitectLocation::Tile {
                    location,
                    architect,
                },
            })
            .collect()
    };

    let mut menus = Vec::with_capacity(2);

    let own_moves = if state.player(color).is_holding_architect {
        to_open_tiles(ArchitectLocation::own_held(color), own)
    } else {
        match state.tile_with_architect(own) {
            Some(tile) => {
                let from = ArchitectLocation::Tile {
                    location: tile.location,
                    architect: own,
                };
                let mut moves = to_open_tiles(from, own);
                moves.push(GameAction::MoveArchitect {
                    from,
                    to: ArchitectLocation::own_held(color),
                });
                moves
            }
            None => Vec::new(),
        }
    };
    menus.push(
        PossibleActions::new(own_moves)
            .with_message(Message::for_player(MessageKind::MoveArchitect, color))
            .with_continuation(GameStateChange::next_player()),
    );

    match state.neutral_architect() {
        NeutralArchitect::Held(holder) if holder == color => menus.push(
            PossibleActions::new(to_open_tiles(
                ArchitectLocation::Held {
                    holder: color,
                    architect: ArchitectColor::Neutral,
                },
                ArchitectColor::Neutral,
            ))
            .with_message(Message::for_player(MessageKind::MoveArchitect, color))
            .with_continuation(GameStateChange::next_player()),
        ),
        NeutralArchitect::OnTile(location) => menus.push(
            PossibleActions::single(GameAction::MoveArchitect {
                from: ArchitectLocation::Tile {
                    location,
                    architect: ArchitectColor::Neutral,
                },
                to: ArchitectLocation::OffBoard,
            })
            .with_message(Message::for_player(MessageKind::MoveArchitect, color))
            .with_continuation(GameStateChange::NextPlayer {
                advance_turn_counter: false,
            }),
        ),
        _ => {}
    }

    PossibleActions::composite(menus)
}
