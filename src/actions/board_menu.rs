//! Board action menus.
//!
//! Filling the last spot of a tile triggers its location's board action for
//! the player who filled it. The menu lists every legal way to perform the
//! action plus an explicit skip.

use super::action::GameAction;
use super::possible::{MenuEntry, PossibleActions};
use crate::board::{Board, BoardAction, Location};
use crate::changes::Reserve;
use crate::core::{InfluenceColor, Message, MessageKind, MessageParam, PlayerColor};
use crate::state::{GameState, NeutralArchitect};

/// Menu for the board action of `location`.
pub(crate) fn board_action_menu(
    board: &Board,
    state: &GameState,
    location: Location,
    color: PlayerColor,
) -> PossibleActions {
    let mut menu = action_options(state, color, &board.info(location).action);
    menu.push(MenuEntry::Action(skip(color)));
    menu.with_message(
        Message::for_player(MessageKind::BoardAction, color).with(MessageParam::Location(location)),
    )
}

/// Menu for one branch of an `Either` board action.
pub(crate) fn sub_action_menu(
    state: &GameState,
    color: PlayerColor,
    action: &BoardAction,
) -> PossibleActions {
    let mut menu = action_options(state, color, action);
    menu.push(MenuEntry::Action(skip(color)));
    menu.with_message(Message::for_player(MessageKind::ChooseBoardSubAction, color))
}

fn skip(color: PlayerColor) -> GameAction {
    GameAction::explicit(Message::for_player(MessageKind::SkipBoardAction, color))
}

/// Legal ways to perform `action`, without the skip.
pub(crate) fn action_options(
    state: &GameState,
    color: PlayerColor,
    action: &BoardAction,
) -> PossibleActions {
    let player = state.player(color);

    let actions = match action {
        BoardAction::Influence { zone, nb_cubes } => {
            let mut actions = Vec::new();
            for (source, available) in [
                (Reserve::Active, player.nb_active_cubes),
                (Reserve::Passive, player.nb_passive_cubes),
            ] {
                for count in 1..=(*nb_cubes).min(available) {
                    actions.push(GameAction::SendCubesToZone {
                        color,
                        source,
                        zone: *zone,
                        count,
                    });
                }
            }
            actions
        }

        BoardAction::Activate { nb_cubes } => (1..=(*nb_cubes).min(player.nb_passive_cubes))
            .map(|count| GameAction::ActivateCubes { color, count })
            .collect(),

        BoardAction::Transfer { nb_cubes } => {
            let mut actions = Vec::new();
            for from in InfluenceColor::ALL {
                let owned = state.zone(from).count(color);
                if owned == 0 {
                    continue;
                }
                for to in InfluenceColor::ALL.into_iter().filter(|&to| to != from) {
                    for count in 1..=(*nb_cubes).min(owned) {
                        actions.push(GameAction::MoveCubesBetweenZones {
                            color,
                            from,
                            to,
                            count,
                        });
                    }
                }
            }
            actions
        }

        BoardAction::Star => state
            .tiles()
            .iter()
            .filter(|tile| {
                matches!(tile.star, Some(star) if star.color == color && star.nb_stars < 3)
            })
            .map(|tile| GameAction::IncreaseStarToken {
                location: tile.location,
            })
            .collect(),

        BoardAction::NeutralArchitect => {
            if state.neutral_architect() == NeutralArchitect::OffBoard {
                vec![GameAction::TakeNeutralArchitect { color }]
            } else {
                Vec::new()
            }
        }

        BoardAction::Either(first, second) => [first, second]
            .into_iter()
            .filter(|branch| !action_options(state, color, branch).is_empty())
            .map(|branch| GameAction::SelectBoardAction {
                color,
                action: (**branch).clone(),
            })
            .collect(),
    };

    PossibleActions::new(actions)
}
