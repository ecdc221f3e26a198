//! Board topology: which coordinates exist, what each one does, and which
//! locations touch.
//!
//! The board is immutable. Build it once with [`Board::standard`] and pass it
//! by reference (or behind an `Arc`) to everything that needs it; the state
//! model never stores a copy.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{BoardAction, BoardActionInfo};
use super::location::Location;
use crate::core::InfluenceColor;

/// Board width in columns.
pub const BOARD_COLUMNS: u8 = 6;

/// Board height in lines.
pub const BOARD_LINES: u8 = 4;

/// A valid location with its metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardEntry {
    pub location: Location,
    pub info: BoardActionInfo,
}

/// Immutable board topology.
#[derive(Clone, Debug)]
pub struct Board {
    /// Valid locations in canonical (line-major) order.
    entries: Vec<BoardEntry>,
    index: FxHashMap<Location, usize>,
    /// Adjacent entry indices, per entry.
    adjacency: Vec<SmallVec<[usize; 4]>>,
}

impl Board {
    /// Build a board from its entries.
    ///
    /// Entry order becomes the canonical location order, which fixes tile
    /// order in the game state and therefore every iteration that depends
    /// on it (dealing, flood fill).
    #[must_use]
    pub fn new(entries: Vec<BoardEntry>) -> Self {
        let mut index = FxHashMap::default();
        for (i, entry) in entries.iter().enumerate() {
            let previous = index.insert(entry.location, i);
            assert!(previous.is_none(), "location {} listed twice", entry.location);
        }

        let adjacency = entries
            .iter()
            .map(|entry| {
                entry
                    .location
                    .neighbors()
                    .filter_map(|neighbor| index.get(&neighbor).copied())
                    .collect()
            })
            .collect();

        Self {
            entries,
            index,
            adjacency,
        }
    }

    /// The standard 6x4 board with its four corners cut off.
    #[must_use]
    pub fn standard() -> Self {
        use BoardAction::*;
        use InfluenceColor::*;
        let either = BoardAction::either;

        #[rustfmt::skip]
        let table = [
            // line 0
            (1, 0, Influence { zone: Religious, nb_cubes: 2 }, 1),
            (2, 0, Activate { nb_cubes: 3 }, 2),
            (3, 0, Star, 3),
            (4, 0, Transfer { nb_cubes: 2 }, 1),
            // line 1
            (0, 1, Influence { zone: Citadel, nb_cubes: 3 }, 3),
            (1, 1, NeutralArchitect, 2),
            (2, 1, either(Activate { nb_cubes: 2 }, Influence { zone: Military, nb_cubes: 1 }), 1),
            (3, 1, Influence { zone: Politic, nb_cubes: 2 }, 2),
            (4, 1, Activate { nb_cubes: 2 }, 3),
            (5, 1, Star, 1),
            // line 2
            (0, 2, Transfer { nb_cubes: 3 }, 2),
            (1, 2, Influence { zone: Military, nb_cubes: 2 }, 3),
            (2, 2, either(Star, Transfer { nb_cubes: 1 }), 1),
            (3, 2, Influence { zone: Economic, nb_cubes: 3 }, 2),
            (4, 2, Activate { nb_cubes: 1 }, 1),
            (5, 2, either(NeutralArchitect, Activate { nb_cubes: 2 }), 3),
            // line 3
            (1, 3, Influence { zone: Economic, nb_cubes: 1 }, 1),
            (2, 3, Transfer { nb_cubes: 2 }, 2),
            (3, 3, Activate { nb_cubes: 3 }, 3),
            (4, 3, Influence { zone: Politic, nb_cubes: 2 }, 2),
        ];

        let entries = table
            .into_iter()
            .map(|(column, line, action, cubes_per_spot)| BoardEntry {
                location: Location::new(column, line),
                info: BoardActionInfo::new(action, cubes_per_spot),
            })
            .collect();

        Self::new(entries)
    }

    /// Number of valid locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the board empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in canonical order.
    #[must_use]
    pub fn entries(&self) -> &[BoardEntry] {
        &self.entries
    }

    /// Valid locations in canonical order.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.entries.iter().map(|entry| entry.location)
    }

    /// Canonical index of a location, if valid.
    #[must_use]
    pub fn index_of(&self, location: Location) -> Option<usize> {
        self.index.get(&location).copied()
    }

    /// Is this coordinate a valid location?
    #[must_use]
    pub fn contains(&self, location: Location) -> bool {
        self.index.contains_key(&location)
    }

    /// Metadata for a valid location.
    ///
    /// # Panics
    ///
    /// Panics if `location` is not on the board.
    #[must_use]
    pub fn info(&self, location: Location) -> &BoardActionInfo {
        &self.entries[self.expect_index(location)].info
    }

    /// Cubes per spot for a valid location.
    #[must_use]
    pub fn cubes_per_spot(&self, location: Location) -> u8 {
        self.info(location).cubes_per_spot
    }

    /// Canonical indices of the locations adjacent to the one at `index`.
    #[must_use]
    pub fn adjacent_indices(&self, index: usize) -> &[usize] {
        &self.adjacency[index]
    }

    /// Valid locations adjacent to `location`.
    pub fn neighbors(&self, location: Location) -> impl Iterator<Item = Location> + '_ {
        self.adjacency[self.expect_index(location)]
            .iter()
            .map(|&i| self.entries[i].location)
    }

    /// Are two valid locations orthogonally adjacent?
    #[must_use]
    pub fn are_adjacent(&self, a: Location, b: Location) -> bool {
        let b_index = self.expect_index(b);
        self.adjacency[self.expect_index(a)].contains(&b_index)
    }

    fn expect_index(&self, location: Location) -> usize {
        match self.index_of(location) {
            Some(i) => i,
            None => panic!("location {location} is not on the board"),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_board_shape() {
        let board = Board::standard();
        assert_eq!(board.len(), 20);
        assert!(!board.contains(Location::new(0, 0)));
        assert!(!board.contains(Location::new(5, 0)));
        assert!(!board.contains(Location::new(0, 3)));
        assert!(!board.contains(Location::new(5, 3)));
        assert!(board.contains(Location::new(3, 0)));
        assert_eq!(board.index_of(Location::new(1, 0)), Some(0));
        assert_eq!(board.index_of(Location::new(0, 1)), Some(4));
    }

    #[test]
    fn test_line_major_order() {
        let board = Board::standard();
        let locations: Vec<_> = board.locations().collect();
        let mut sorted = locations.clone();
        sorted.sort_by_key(|l| (l.line, l.column));
        assert_eq!(locations, sorted);
    }

    #[test]
    fn test_adjacency_skips_invalid_corners() {
        let board = Board::standard();

        let corner_neighbors: Vec<_> = board.neighbors(Location::new(1, 0)).collect();
        assert_eq!(corner_neighbors, vec![Location::new(2, 0), Location::new(1, 1)]);

        assert_eq!(board.neighbors(Location::new(2, 1)).count(), 4);
        assert!(board.are_adjacent(Location::new(2, 1), Location::new(2, 2)));
        assert!(!board.are_adjacent(Location::new(2, 1), Location::new(3, 2)));
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let board = Board::standard();
        for a in board.locations() {
            for b in board.neighbors(a) {
                assert!(board.are_adjacent(b, a), "{a} -> {b} not symmetric");
            }
        }
    }

    #[test]
    fn test_cubes_per_spot() {
        let board = Board::standard();
        assert_eq!(board.cubes_per_spot(Location::new(3, 0)), 3);
        assert_eq!(board.cubes_per_spot(Location::new(1, 0)), 1);
        assert_eq!(board.info(Location::new(3, 0)).action, BoardAction::Star);
    }

    #[test]
    #[should_panic(expected = "not on the board")]
    fn test_info_panics_off_board() {
        let _ = Board::standard().info(Location::new(0, 0));
    }

    #[test]
    #[should_panic(expected = "listed twice")]
    fn test_duplicate_location_panics() {
        let entry = BoardEntry {
            location: Location::new(0, 0),
            info: BoardActionInfo::new(BoardAction::Star, 1),
        };
        let _ = Board::new(vec![entry.clone(), entry]);
    }
}
