//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A board coordinate (column, line).
///
/// Not every coordinate is a valid location; see [`Board`](super::Board).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    pub column: u8,
    pub line: u8,
}

impl Location {
    #[must_use]
    pub const fn new(column: u8, line: u8) -> Self {
        Self { column, line }
    }

    /// Orthogonal neighbor coordinates, which may fall off the board.
    pub fn neighbors(self) -> impl Iterator<Item = Location> {
        let Location { column, line } = self;
        [
            column.checked_sub(1).map(|c| Location::new(c, line)),
            column.checked_add(1).map(|c| Location::new(c, line)),
            line.checked_sub(1).map(|l| Location::new(column, l)),
            line.checked_add(1).map(|l| Location::new(column, l)),
        ]
        .into_iter()
        .flatten()
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.column, self.line)
    }
}
