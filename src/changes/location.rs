//! Endpoints for cube and architect moves.

use serde::{Deserialize, Serialize};

use crate::board::Location;
use crate::core::{ArchitectColor, InfluenceColor, PlayerColor};

/// Which reserve a player spends cubes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reserve {
    Active,
    Passive,
}

/// Somewhere a player's cubes can be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CubeLocation {
    ActiveReserve(PlayerColor),
    PassiveReserve(PlayerColor),
    Zone {
        zone: InfluenceColor,
        color: PlayerColor,
    },
    TileSpot {
        location: Location,
        spot: u8,
        color: PlayerColor,
    },
}

impl CubeLocation {
    /// A player's reserve.
    #[must_use]
    pub const fn reserve(reserve: Reserve, color: PlayerColor) -> Self {
        match reserve {
            Reserve::Active => CubeLocation::ActiveReserve(color),
            Reserve::Passive => CubeLocation::PassiveReserve(color),
        }
    }

    /// Owner of the cubes at this location.
    #[must_use]
    pub const fn color(self) -> PlayerColor {
        match self {
            CubeLocation::ActiveReserve(color)
            | CubeLocation::PassiveReserve(color)
            | CubeLocation::Zone { color, .. }
            | CubeLocation::TileSpot { color, .. } => color,
        }
    }
}

/// Somewhere an architect can be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArchitectLocation {
    /// In a player's zone, off the tiles.
    Held {
        holder: PlayerColor,
        architect: ArchitectColor,
    },
    /// Standing on a tile.
    Tile {
        location: Location,
        architect: ArchitectColor,
    },
    /// Off the board. Only the neutral architect goes here.
    OffBoard,
}

impl ArchitectLocation {
    /// A player's own architect in their zone.
    #[must_use]
    pub const fn own_held(color: PlayerColor) -> Self {
        ArchitectLocation::Held {
            holder: color,
            architect: ArchitectColor::Player(color),
        }
    }

    /// The architect at this location.
    #[must_use]
    pub const fn architect(self) -> ArchitectColor {
        match self {
            ArchitectLocation::Held { architect, .. }
            | ArchitectLocation::Tile { architect, .. } => architect,
            ArchitectLocation::OffBoard => ArchitectColor::Neutral,
        }
    }

    /// The tile location, if on a tile.
    #[must_use]
    pub const fn tile(self) -> Option<Location> {
        match self {
            ArchitectLocation::Tile { location, .. } => Some(location),
            _ => None,
        }
    }
}
