//! Per-location mutable record.

use serde::{Deserialize, Serialize};

use crate::board::{Location, Tile};
use crate::core::{ArchitectColor, PlayerColor};

/// Worker spots per tile.
pub const NB_SPOTS: usize = 3;

/// Star token placed on a completed building.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StarToken {
    pub color: PlayerColor,
    /// 1-3.
    pub nb_stars: u8,
}

/// A tile on its board location.
///
/// Cubes per spot are a property of the location (see
/// [`Board::cubes_per_spot`](crate::board::Board::cubes_per_spot)), not of
/// the tile state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileState {
    pub tile: Tile,
    pub location: Location,
    pub architect: Option<ArchitectColor>,
    /// Owner of the cubes committed to each spot.
    pub spots: [Option<PlayerColor>; NB_SPOTS],
    /// Completed and flipped to its building side.
    pub building_facing: bool,
    pub star: Option<StarToken>,
}

impl TileState {
    /// Construction-side tile with nothing on it.
    #[must_use]
    pub fn new(tile: Tile, location: Location) -> Self {
        Self {
            tile,
            location,
            architect: None,
            spots: [None; NB_SPOTS],
            building_facing: false,
            star: None,
        }
    }

    /// Number of occupied spots.
    #[must_use]
    pub fn nb_filled_spots(&self) -> usize {
        self.spots.iter().filter(|spot| spot.is_some()).count()
    }

    /// First empty spot, if any.
    #[must_use]
    pub fn next_empty_spot(&self) -> Option<usize> {
        self.spots.iter().position(Option::is_none)
    }

    /// Occupied spots with their owners, in spot order.
    pub fn occupied_spots(&self) -> impl Iterator<Item = (usize, PlayerColor)> + '_ {
        self.spots
            .iter()
            .enumerate()
            .filter_map(|(spot, owner)| owner.map(|color| (spot, color)))
    }

    /// The tile's century has been reached.
    #[must_use]
    pub fn is_revealed(&self, century: u8) -> bool {
        self.tile.century <= century
    }

    /// Being built: an architect stands on an unfinished tile.
    #[must_use]
    pub fn is_under_construction(&self) -> bool {
        self.architect.is_some() && !self.building_facing
    }

    /// An architect may be moved here.
    #[must_use]
    pub fn accepts_architect(&self, century: u8) -> bool {
        self.architect.is_none() && !self.building_facing && self.is_revealed(century)
    }

    /// Workers may be sent here (cube count permitting).
    #[must_use]
    pub fn accepts_workers(&self) -> bool {
        self.is_under_construction() && self.next_empty_spot().is_some()
    }

    /// Number of stars this player has on the tile.
    #[must_use]
    pub fn stars_of(&self, color: PlayerColor) -> u8 {
        match self.star {
            Some(star) if star.color == color => star.nb_stars,
            _ => 0,
        }
    }
}
