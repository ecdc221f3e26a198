//! Building scoring.
//!
//! ## Incomplete buildings
//!
//! Tiles still under construction pay every occupied spot's owner that
//! location's cubes per spot.
//!
//! ## Building groups
//!
//! A player's starred tiles form a graph under board adjacency. Each
//! connected group has a naive score (sum of stars) and a value score (sum
//! of `stars * (stars + 1) / 2`). The group with the highest value score
//! counts its value score; every other group counts its naive score. Groups
//! are discovered in board location order, and the first of several equally
//! valued groups is the one that counts as largest.

use smallvec::SmallVec;

use crate::board::{Board, Location};
use crate::changes::GameStateChange;
use crate::core::PlayerColor;
use crate::state::GameState;

/// A connected set of one player's starred buildings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildingGroup {
    /// In discovery order; the first is the group's lowest board location.
    pub locations: Vec<Location>,
    /// Sum of stars.
    pub naive_score: u32,
    /// Sum of triangular star values.
    pub value_score: u32,
}

/// Triangular value of a star token.
#[must_use]
pub const fn star_value(nb_stars: u8) -> u32 {
    let stars = nb_stars as u32;
    stars * (stars + 1) / 2
}

/// Connected groups of `color`'s starred tiles, in board location order.
#[must_use]
pub fn building_groups(board: &Board, state: &GameState, color: PlayerColor) -> Vec<BuildingGroup> {
    let tiles = state.tiles();
    debug_assert!(
        tiles.iter().zip(board.locations()).all(|(t, l)| t.location == l),
        "tiles are kept in board order"
    );

    let stars: Vec<u8> = tiles.iter().map(|tile| tile.stars_of(color)).collect();
    let mut visited = vec![false; stars.len()];
    let mut groups = Vec::new();

    for start in 0..stars.len() {
        if stars[start] == 0 || visited[start] {
            continue;
        }

        let mut group = BuildingGroup {
            locations: Vec::new(),
            naive_score: 0,
            value_score: 0,
        };
        let mut pending: SmallVec<[usize; 8]> = SmallVec::new();
        pending.push(start);
        visited[start] = true;

        while let Some(index) = pending.pop() {
            group.locations.push(tiles[index].location);
            group.naive_score += u32::from(stars[index]);
            group.value_score += star_value(stars[index]);

            for &neighbor in board.adjacent_indices(index) {
                if stars[neighbor] > 0 && !visited[neighbor] {
                    visited[neighbor] = true;
                    pending.push(neighbor);
                }
            }
        }

        groups.push(group);
    }

    groups
}

/// Total building score over a set of groups.
#[must_use]
pub fn building_score(groups: &[BuildingGroup]) -> u32 {
    let mut largest: Option<usize> = None;
    for (i, group) in groups.iter().enumerate() {
        if largest.map_or(true, |best| group.value_score > groups[best].value_score) {
            largest = Some(i);
        }
    }

    groups
        .iter()
        .enumerate()
        .map(|(i, group)| {
            if Some(i) == largest {
                group.value_score
            } else {
                group.naive_score
            }
        })
        .sum()
}

/// Building group scoring for every player.
#[must_use]
pub fn score_buildings(board: &Board, state: &GameState) -> GameStateChange {
    let changes = state
        .colors()
        .filter_map(|color| {
            let amount = building_score(&building_groups(board, state, color));
            (amount > 0).then_some(GameStateChange::ScorePoints { color, amount })
        })
        .collect();
    GameStateChange::Composite(changes)
}

/// Incomplete building scoring for every occupied spot.
#[must_use]
pub fn score_incomplete_buildings(board: &Board, state: &GameState) -> GameStateChange {
    let changes = state
        .tiles()
        .iter()
        .filter(|tile| tile.is_under_construction())
        .flat_map(|tile| {
            let amount = u32::from(board.cubes_per_spot(tile.location));
            tile.occupied_spots()
                .map(move |(_, color)| GameStateChange::ScorePoints { color, amount })
        })
        .collect();
    GameStateChange::Composite(changes)
}
