//! Building tiles.

use serde::{Deserialize, Serialize};

use crate::core::{InfluenceColor, LAST_CENTURY};

/// Immutable building tile.
///
/// A tile becomes buildable once the game reaches its century. When the
/// building completes, cubes committed to it flow into its influence zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub influence: InfluenceColor,
    pub century: u8,
    /// Index of the building artwork; unique per tile.
    pub art: u8,
}

impl Tile {
    /// The canonical (unshuffled) deck: one tile per influence color per century.
    #[must_use]
    pub fn standard_deck() -> Vec<Tile> {
        let mut deck = Vec::new();
        for century in 0..=LAST_CENTURY {
            for influence in InfluenceColor::ALL {
                deck.push(Tile {
                    influence,
                    century,
                    art: deck.len() as u8,
                });
            }
        }
        deck
    }
}
