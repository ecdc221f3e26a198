//! Influence colors and leader cards.
//!
//! There are five influence zones. Four are colored; the fifth is the
//! citadel. Zone order is significant: scoring walks the zones in
//! `InfluenceColor::ALL` order and the majority cascade flows from each
//! zone into the next one.

use serde::{Deserialize, Serialize};

/// Number of influence zones (including the citadel).
pub const NB_INFLUENCE_ZONES: usize = 5;

/// An influence zone / color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InfluenceColor {
    Religious,
    Military,
    Politic,
    Economic,
    Citadel,
}

impl InfluenceColor {
    /// All zones, in scoring order.
    pub const ALL: [InfluenceColor; NB_INFLUENCE_ZONES] = [
        InfluenceColor::Religious,
        InfluenceColor::Military,
        InfluenceColor::Politic,
        InfluenceColor::Economic,
        InfluenceColor::Citadel,
    ];

    /// Index into per-zone arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The zone the majority cascade flows into, or `None` for the citadel
    /// (whose cascade returns to the active reserve).
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Is this the last zone in scoring order?
    #[must_use]
    pub const fn is_citadel(self) -> bool {
        matches!(self, InfluenceColor::Citadel)
    }
}

impl std::fmt::Display for InfluenceColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            InfluenceColor::Religious => "Religious",
            InfluenceColor::Military => "Military",
            InfluenceColor::Politic => "Politic",
            InfluenceColor::Economic => "Economic",
            InfluenceColor::Citadel => "Citadel",
        };
        f.write_str(name)
    }
}

/// A leader card, identified by its influence color.
///
/// Leader cards are held by at most one player; unheld cards sit in the
/// available pool on the board.
///
/// - Religious: taking it sends 3 of the taker's cubes to the citadel.
/// - Politic: when a building holding the holder's cubes completes, the
///   holder chooses which zone receives them.
/// - Military, Economic: no ability beyond the shared take bonus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LeaderCard(pub InfluenceColor);

impl LeaderCard {
    pub const RELIGIOUS: LeaderCard = LeaderCard(InfluenceColor::Religious);
    pub const MILITARY: LeaderCard = LeaderCard(InfluenceColor::Military);
    pub const POLITIC: LeaderCard = LeaderCard(InfluenceColor::Politic);
    pub const ECONOMIC: LeaderCard = LeaderCard(InfluenceColor::Economic);

    /// Cubes forced into the citadel when the religious leader is taken.
    pub const RELIGIOUS_CITADEL_CUBES: u8 = 3;

    /// The leader cards in play for a given player count.
    ///
    /// 2-3 players use the three-card set; 4-5 players add the economic leader.
    #[must_use]
    pub fn for_player_count(player_count: usize) -> Vec<LeaderCard> {
        let mut cards = vec![Self::RELIGIOUS, Self::MILITARY, Self::POLITIC];
        if player_count >= 4 {
            cards.push(Self::ECONOMIC);
        }
        cards
    }

    /// The card's influence color.
    #[must_use]
    pub const fn color(self) -> InfluenceColor {
        self.0
    }
}

impl std::fmt::Display for LeaderCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} leader", self.0)
    }
}
