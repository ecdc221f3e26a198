//! The century-end scoring sequence.
//!
//! Scoring is a fixed linear automaton. Each phase is offered to the host as
//! a single-entry menu; executing it yields the phase's delta followed by the
//! next phase's menu, computed against the state projected past the delta.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::actions::{GameAction, PossibleActions};
use crate::board::Board;
use crate::changes::GameStateChange;
use crate::core::{InfluenceColor, Message, MessageKind, MessageParam, LAST_CENTURY};
use crate::scoring;
use crate::state::GameState;

/// One step of the scoring sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoringPhase {
    Init,
    ScoreZone(InfluenceColor),
    IncompleteBuildings,
    ActiveCubes,
    Buildings,
    FinishGame,
    PrepareNextCentury,
}

impl ScoringPhase {
    /// The phase after this one, or `None` at the end of the sequence.
    #[must_use]
    pub fn next(self, century: u8) -> Option<ScoringPhase> {
        match self {
            ScoringPhase::Init => Some(ScoringPhase::ScoreZone(InfluenceColor::ALL[0])),
            ScoringPhase::ScoreZone(zone) => Some(
                zone.next()
                    .map_or(ScoringPhase::IncompleteBuildings, ScoringPhase::ScoreZone),
            ),
            ScoringPhase::IncompleteBuildings => Some(ScoringPhase::ActiveCubes),
            ScoringPhase::ActiveCubes => Some(ScoringPhase::Buildings),
            ScoringPhase::Buildings if century >= LAST_CENTURY => Some(ScoringPhase::FinishGame),
            ScoringPhase::Buildings => Some(ScoringPhase::PrepareNextCentury),
            ScoringPhase::FinishGame | ScoringPhase::PrepareNextCentury => None,
        }
    }

    /// Is this the last phase of a sequence?
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, ScoringPhase::FinishGame | ScoringPhase::PrepareNextCentury)
    }
}

/// Menu offering one scoring phase.
#[must_use]
pub fn scoring_menu(state: &GameState, phase: ScoringPhase) -> PossibleActions {
    let kind = match phase {
        ScoringPhase::Init => MessageKind::BeginScoring,
        _ => MessageKind::ScoringStep,
    };
    let mut message = Message::new(kind).with(MessageParam::Count(u32::from(state.century())));
    if let ScoringPhase::ScoreZone(zone) = phase {
        message = message.with(MessageParam::Zone(zone));
    }
    PossibleActions::single(GameAction::ScoringStep(phase)).with_message(message)
}

/// Delta of one scoring phase, followed by the next phase's menu.
#[must_use]
pub fn scoring_step(board: &Board, state: &GameState, phase: ScoringPhase) -> GameStateChange {
    debug!(century = state.century(), ?phase, "scoring step");

    let delta = match phase {
        ScoringPhase::Init => GameStateChange::none(),
        ScoringPhase::ScoreZone(zone) => scoring::score_zone(state, zone),
        ScoringPhase::IncompleteBuildings => scoring::score_incomplete_buildings(board, state),
        ScoringPhase::ActiveCubes => scoring::score_active_cubes(state),
        ScoringPhase::Buildings => scoring::score_buildings(board, state),
        ScoringPhase::FinishGame => GameStateChange::FinishGame,
        ScoringPhase::PrepareNextCentury => GameStateChange::Composite(vec![
            GameStateChange::PrepareNextCentury,
            GameStateChange::NextPlayer {
                advance_turn_counter: false,
            },
        ]),
    };

    match phase.next(state.century()) {
        Some(next) => {
            let projected = delta.apply(state);
            let menu = scoring_menu(&projected, next);
            delta.then(GameStateChange::queue(menu))
        }
        None => delta,
    }
}
