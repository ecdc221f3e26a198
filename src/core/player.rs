//! Player identification.
//!
//! ## PlayerColor
//!
//! Players are identified by their color. There are five normal colors;
//! a game seats 2-5 of them.
//!
//! ## ArchitectColor
//!
//! Architects belong either to a player or to nobody (the neutral architect).

use serde::{Deserialize, Serialize};

/// Number of normal player colors.
pub const NB_PLAYER_COLORS: usize = 5;

/// A normal player color.
///
/// Colors double as player identifiers. "No color" is expressed as
/// `Option<PlayerColor>` wherever a slot may be empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
}

impl PlayerColor {
    /// All colors, in index order.
    pub const ALL: [PlayerColor; NB_PLAYER_COLORS] = [
        PlayerColor::Red,
        PlayerColor::Green,
        PlayerColor::Blue,
        PlayerColor::Yellow,
        PlayerColor::Purple,
    ];

    /// Index into per-color arrays (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Convert back from an index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlayerColor::Red => "Red",
            PlayerColor::Green => "Green",
            PlayerColor::Blue => "Blue",
            PlayerColor::Yellow => "Yellow",
            PlayerColor::Purple => "Purple",
        };
        f.write_str(name)
    }
}

/// Static player identity: color and display name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub color: PlayerColor,
    pub name: String,
}

impl Player {
    /// Create a player.
    pub fn new(color: PlayerColor, name: impl Into<String>) -> Self {
        Self {
            color,
            name: name.into(),
        }
    }
}

/// Owner of an architect pawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArchitectColor {
    /// A player's own architect.
    Player(PlayerColor),
    /// The neutral architect, owned by nobody.
    Neutral,
}

impl ArchitectColor {
    /// The owning player, if any.
    #[must_use]
    pub const fn player(self) -> Option<PlayerColor> {
        match self {
            ArchitectColor::Player(color) => Some(color),
            ArchitectColor::Neutral => None,
        }
    }

    /// Is this the neutral architect?
    #[must_use]
    pub const fn is_neutral(self) -> bool {
        matches!(self, ArchitectColor::Neutral)
    }
}

impl From<PlayerColor> for ArchitectColor {
    fn from(color: PlayerColor) -> Self {
        ArchitectColor::Player(color)
    }
}

impl std::fmt::Display for ArchitectColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArchitectColor::Player(color) => write!(f, "{color} architect"),
            ArchitectColor::Neutral => f.write_str("Neutral architect"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_index_roundtrip() {
        for (i, color) in PlayerColor::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
            assert_eq!(PlayerColor::from_index(i), Some(*color));
        }
        assert_eq!(PlayerColor::from_index(5), None);
    }

    #[test]
    fn test_architect_owner() {
        assert_eq!(ArchitectColor::from(PlayerColor::Blue).player(), Some(PlayerColor::Blue));
        assert_eq!(ArchitectColor::Neutral.player(), None);
        assert!(ArchitectColor::Neutral.is_neutral());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PlayerColor::Purple), "Purple");
        assert_eq!(format!("{}", ArchitectColor::Player(PlayerColor::Red)), "Red architect");
    }
}
