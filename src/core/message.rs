//! Opaque decision descriptions.
//!
//! The engine never formats text. Menus and board actions carry a
//! `Message`: a tag plus typed parameters that a localisation layer turns
//! into words.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::influence::{InfluenceColor, LeaderCard};
use super::player::PlayerColor;
use crate::board::Location;

/// What a message is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    /// Top-level turn menu.
    ChooseTurnAction,
    /// Place the architect before doing anything else this century.
    ReturnArchitect,
    /// Choose a tile to send workers to.
    SendWorkers,
    /// Choose a zone for one active cube.
    SendCubeToZone,
    /// Choose where an architect goes.
    MoveArchitect,
    /// Choose a leader card.
    TakeLeaderCard,
    /// A tile's board action was triggered.
    BoardAction,
    /// Pick one of two board sub-actions.
    ChooseBoardSubAction,
    /// Decline the board action.
    SkipBoardAction,
    /// Politic leader: choose where the completed building's cubes go.
    PoliticChooseZone,
    /// Century is over; start scoring.
    BeginScoring,
    /// One scoring step.
    ScoringStep,
}

/// A typed message parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageParam {
    Player(PlayerColor),
    Zone(InfluenceColor),
    Leader(LeaderCard),
    Location(Location),
    Count(u32),
}

/// A tag with typed parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    pub kind: MessageKind,
    /// Most messages carry 0-3 parameters.
    pub params: SmallVec<[MessageParam; 3]>,
}

impl Message {
    /// A message with no parameters.
    #[must_use]
    pub fn new(kind: MessageKind) -> Self {
        Self {
            kind,
            params: SmallVec::new(),
        }
    }

    /// Append a parameter.
    #[must_use]
    pub fn with(mut self, param: MessageParam) -> Self {
        self.params.push(param);
        self
    }

    /// Shorthand for a message addressed to one player.
    #[must_use]
    pub fn for_player(kind: MessageKind, player: PlayerColor) -> Self {
        Self::new(kind).with(MessageParam::Player(player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_params() {
        let message = Message::for_player(MessageKind::PoliticChooseZone, PlayerColor::Green)
            .with(MessageParam::Count(2));

        assert_eq!(message.kind, MessageKind::PoliticChooseZone);
        assert_eq!(
            message.params.as_slice(),
            &[MessageParam::Player(PlayerColor::Green), MessageParam::Count(2)]
        );
        assert!(!message.params.spilled());
    }
}
