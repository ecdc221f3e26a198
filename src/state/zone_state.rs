//! Influence zone cube banks.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerColor, NB_PLAYER_COLORS};

/// Cubes per player color in one influence zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InfluenceZoneState {
    cubes: [u8; NB_PLAYER_COLORS],
}

impl InfluenceZoneState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cubes of one color.
    #[must_use]
    pub fn count(&self, color: PlayerColor) -> u8 {
        self.cubes[color.index()]
    }

    /// Cubes of all colors.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.cubes.iter().map(|&c| u32::from(c)).sum()
    }

    /// Highest per-color count.
    #[must_use]
    pub fn max(&self) -> u8 {
        self.cubes.iter().copied().max().unwrap_or(0)
    }

    pub(crate) fn add(&mut self, color: PlayerColor, count: u8) {
        self.cubes[color.index()] += count;
    }

    pub(crate) fn remove(&mut self, color: PlayerColor, count: u8) {
        let current = self.cubes[color.index()];
        assert!(
            current >= count,
            "zone holds {current} {color} cubes, cannot remove {count}"
        );
        self.cubes[color.index()] = current - count;
    }
}
