//! Board topology.
//!
//! Static, computed once:
//! - `Location`: board coordinates
//! - `Board`: valid locations, per-location board action and metadata,
//!   adjacency
//! - `Tile`: the building tiles dealt onto locations at setup

mod action;
mod location;
mod tile;
mod topology;

pub use action::{BoardAction, BoardActionInfo};
pub use location::Location;
pub use tile::Tile;
pub use topology::{Board, BoardEntry, BOARD_COLUMNS, BOARD_LINES};
