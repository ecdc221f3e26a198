//! Out-of-turn interjections.
//!
//! An interjection hands a decision to a player other than the current one
//! in the middle of a turn. The interrupted turn is kept as an explicit
//! continuation on the interjection menu, headed by a `SetPlayer` that
//! restores the interrupted player before it runs:
//!
//! ```text
//! Composite[
//!     SetPlayer(chooser),
//!     QueuePossibleActions(menu, continuation = Composite[SetPlayer(current), resume..]),
//! ]
//! ```
//!
//! Anything the turn appends later (its `NextPlayer`) threads into that
//! continuation through [`GameStateChange::then`].

use tracing::trace;

use crate::actions::{GameAction, PossibleActions};
use crate::board::Location;
use crate::changes::GameStateChange;
use crate::core::{InfluenceColor, Message, MessageKind, MessageParam, PlayerColor};
use crate::state::GameState;

/// Give `chooser` the decision `menu`, then resume the current player's turn
/// with `resume`.
#[must_use]
pub fn interject(
    state: &GameState,
    chooser: PlayerColor,
    menu: PossibleActions,
    mut resume: GameStateChange,
) -> GameStateChange {
    let interrupted = state.current_color();
    trace!(%interrupted, %chooser, "interjection");

    resume.prepend(GameStateChange::SetPlayer(interrupted));
    GameStateChange::Composite(vec![
        GameStateChange::SetPlayer(chooser),
        GameStateChange::queue(menu.with_continuation(resume)),
    ])
}

/// The politic leader's zone choice for their cubes on a completing tile.
#[must_use]
pub fn politic_zone_choice(
    state: &GameState,
    location: Location,
    holder: PlayerColor,
    completion: GameStateChange,
) -> GameStateChange {
    let menu = PossibleActions::new(
        InfluenceColor::ALL
            .into_iter()
            .map(|zone| GameAction::EmptyTileToZone {
                location,
                color: holder,
                zone,
            })
            .collect(),
    )
    .with_message(
        Message::for_player(MessageKind::PoliticChooseZone, holder)
            .with(MessageParam::Location(location)),
    );

    interject(state, holder, menu, completion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::{GameConfig, NoShuffle};

    #[test]
    fn test_interjection_restores_current_player() {
        let board = Board::standard();
        let state =
            GameState::new(&board, &GameConfig::with_player_count(3), &mut NoShuffle).unwrap();

        let skip = Message::new(MessageKind::SkipBoardAction);
        let menu = PossibleActions::single(GameAction::explicit(skip));
        let resume = GameStateChange::ScorePoints {
            color: PlayerColor::Red,
            amount: 4,
        };
        let change = interject(&state, PlayerColor::Green, menu, resume)
            .then(GameStateChange::next_player());

        let during = change.apply(&state);
        assert_eq!(during.current_color(), PlayerColor::Green);

        let pending = during.possible_actions().unwrap().clone();
        let after = pending
            .execute(0, &board, &during)
            .unwrap()
            .apply(&during.with_possible_actions(None));

        assert_eq!(after.player(PlayerColor::Red).score, 4);
        assert_eq!(after.current_color(), PlayerColor::Green);
        assert_eq!(after.turn(), 1);
    }
}
