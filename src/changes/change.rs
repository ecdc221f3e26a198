//! State changes.
//!
//! A `GameStateChange` is a transient command describing a delta. It is
//! built by an action, may be inspected (previewed, animated) any number of
//! times, and is applied once:
//!
//! ```
//! use rust_citadel::board::Board;
//! use rust_citadel::changes::{CubeLocation, GameStateChange};
//! use rust_citadel::core::{GameConfig, InfluenceColor, NoShuffle, PlayerColor};
//! use rust_citadel::state::GameState;
//!
//! let board = Board::standard();
//! let state = GameState::new(&board, &GameConfig::with_player_count(2), &mut NoShuffle).unwrap();
//!
//! let change = GameStateChange::move_cubes(
//!     2,
//!     CubeLocation::ActiveReserve(PlayerColor::Red),
//!     CubeLocation::Zone { zone: InfluenceColor::Citadel, color: PlayerColor::Red },
//! );
//! let next = change.apply(&state);
//!
//! assert_eq!(next.zone(InfluenceColor::Citadel).count(PlayerColor::Red), 2);
//! assert_eq!(state.zone(InfluenceColor::Citadel).count(PlayerColor::Red), 0);
//! ```
//!
//! Precondition violations panic: only changes built from offered actions
//! are ever applied.

use serde::{Deserialize, Serialize};

use super::location::{ArchitectLocation, CubeLocation};
use crate::actions::PossibleActions;
use crate::board::Location;
use crate::core::{ArchitectColor, LeaderCard, PlayerColor, LAST_CENTURY};
use crate::state::{GameState, NeutralArchitect, StarToken};

/// A delta on the game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStateChange {
    /// Move `count` cubes between two locations of the same player.
    MoveCubes {
        count: u8,
        from: CubeLocation,
        to: CubeLocation,
    },

    /// Move one architect.
    MoveArchitect {
        from: ArchitectLocation,
        to: ArchitectLocation,
    },

    /// Mark a tile completed; place a star token unless no spot was filled.
    FlipTile {
        location: Location,
        star_color: Option<PlayerColor>,
        nb_filled_spots: u8,
    },

    /// Raise a 1- or 2-star token to `new_count`.
    IncreaseStarToken {
        location: Location,
        color: PlayerColor,
        new_count: u8,
    },

    ScorePoints {
        color: PlayerColor,
        amount: u32,
    },

    /// Move a leader card from the available pool to a player.
    TakeLeaderCard {
        color: PlayerColor,
        card: LeaderCard,
    },

    /// Rotate the current player. Without `advance_turn_counter` the turn
    /// counters stay put.
    NextPlayer { advance_turn_counter: bool },

    /// Force the current player. Interjections only.
    SetPlayer(PlayerColor),

    /// Install a decision menu. Always the last change of a chain.
    QueuePossibleActions(Box<PossibleActions>),

    /// Advance the century and flip its untouched tiles.
    PrepareNextCentury,

    /// Mark the game over.
    FinishGame,

    /// Ordered sequence.
    Composite(Vec<GameStateChange>),
}

impl GameStateChange {
    // === Constructors ===

    /// Cube move.
    ///
    /// # Panics
    ///
    /// Panics if the endpoints belong to different players.
    #[must_use]
    pub fn move_cubes(count: u8, from: CubeLocation, to: CubeLocation) -> Self {
        assert_eq!(
            from.color(),
            to.color(),
            "cubes cannot change owner ({from:?} -> {to:?})"
        );
        GameStateChange::MoveCubes { count, from, to }
    }

    /// Architect move.
    ///
    /// # Panics
    ///
    /// Panics if the endpoints name different architects.
    #[must_use]
    pub fn move_architect(from: ArchitectLocation, to: ArchitectLocation) -> Self {
        assert_eq!(
            from.architect(),
            to.architect(),
            "architect moves must keep the same architect"
        );
        GameStateChange::MoveArchitect { from, to }
    }

    /// Queue a menu.
    #[must_use]
    pub fn queue(possible_actions: PossibleActions) -> Self {
        GameStateChange::QueuePossibleActions(Box::new(possible_actions))
    }

    /// The empty change.
    #[must_use]
    pub fn none() -> Self {
        GameStateChange::Composite(Vec::new())
    }

    /// Regular end of turn.
    #[must_use]
    pub fn next_player() -> Self {
        GameStateChange::NextPlayer {
            advance_turn_counter: true,
        }
    }

    // === Composition ===

    /// Run `next` after this change.
    ///
    /// If this change ends by queueing a menu, `next` becomes part of that
    /// menu's continuation instead, so it runs once the decision resolves.
    #[must_use]
    pub fn then(self, next: GameStateChange) -> GameStateChange {
        match self {
            GameStateChange::QueuePossibleActions(mut menu) => {
                menu.push_continuation(next);
                GameStateChange::QueuePossibleActions(menu)
            }
            GameStateChange::Composite(mut changes) => match changes.pop() {
                Some(last) if last.ends_with_queue() => {
                    changes.push(last.then(next));
                    GameStateChange::Composite(changes)
                }
                Some(last) => {
                    changes.push(last);
                    changes.push(next);
                    GameStateChange::Composite(changes)
                }
                None => next,
            },
            other => GameStateChange::Composite(vec![other, next]),
        }
    }

    /// Put `change` in front of everything else.
    pub fn prepend(&mut self, change: GameStateChange) {
        match self {
            GameStateChange::Composite(changes) => changes.insert(0, change),
            other => {
                let rest = std::mem::replace(other, GameStateChange::none());
                *other = GameStateChange::Composite(vec![change, rest]);
            }
        }
    }

    /// Does this chain end by queueing a menu?
    #[must_use]
    pub fn ends_with_queue(&self) -> bool {
        self.queued_menu().is_some()
    }

    /// The menu this chain ends by queueing, if any.
    #[must_use]
    pub fn queued_menu(&self) -> Option<&PossibleActions> {
        match self {
            GameStateChange::QueuePossibleActions(menu) => Some(menu),
            GameStateChange::Composite(changes) => changes.last().and_then(Self::queued_menu),
            _ => None,
        }
    }

    /// Is this an empty composite (possibly nested)?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            GameStateChange::Composite(changes) => changes.iter().all(Self::is_empty),
            _ => false,
        }
    }

    /// Visit the atomic changes in application order.
    pub fn for_each_atomic<'a>(&'a self, f: &mut impl FnMut(&'a GameStateChange)) {
        match self {
            GameStateChange::Composite(changes) => {
                for change in changes {
                    change.for_each_atomic(f);
                }
            }
            atomic => f(atomic),
        }
    }

    /// The atomic changes in application order.
    #[must_use]
    pub fn atomic_changes(&self) -> Vec<&GameStateChange> {
        let mut out = Vec::new();
        self.for_each_atomic(&mut |change| out.push(change));
        out
    }

    /// The change undoing this one, for moves only.
    ///
    /// Returns `None` if any part is not a cube or architect move; undo for
    /// those goes through snapshots.
    #[must_use]
    pub fn inverse(&self) -> Option<GameStateChange> {
        match self {
            GameStateChange::MoveCubes { count, from, to } => Some(GameStateChange::MoveCubes {
                count: *count,
                from: *to,
                to: *from,
            }),
            GameStateChange::MoveArchitect { from, to } => Some(GameStateChange::MoveArchitect {
                from: *to,
                to: *from,
            }),
            GameStateChange::Composite(changes) => changes
                .iter()
                .rev()
                .map(Self::inverse)
                .collect::<Option<Vec<_>>>()
                .map(GameStateChange::Composite),
            _ => None,
        }
    }

    // === Application ===

    /// Apply to a copy of `state`.
    ///
    /// `state` itself is never modified.
    #[must_use]
    pub fn apply(&self, state: &GameState) -> GameState {
        let mut next = state.clone();
        self.apply_to(&mut next);
        next
    }

    fn apply_to(&self, state: &mut GameState) {
        match self {
            GameStateChange::MoveCubes { count, from, to } => {
                remove_cubes(state, *count, *from);
                add_cubes(state, *count, *to);
            }

            GameStateChange::MoveArchitect { from, to } => {
                remove_architect(state, *from);
                place_architect(state, *to);
            }

            GameStateChange::FlipTile {
                location,
                star_color,
                nb_filled_spots,
            } => {
                let tile = state.tile_mut(*location);
                assert!(!tile.building_facing, "tile {location} is already a building");
                assert!(tile.architect.is_none(), "tile {location} still has an architect");
                assert_eq!(tile.nb_filled_spots(), 0, "tile {location} still has workers");
                assert!(*nb_filled_spots <= 3, "a tile has 3 spots, not {nb_filled_spots}");

                tile.building_facing = true;
                tile.star = match star_color {
                    Some(color) if *nb_filled_spots > 0 => Some(StarToken {
                        color: *color,
                        nb_stars: *nb_filled_spots,
                    }),
                    _ => None,
                };
            }

            GameStateChange::IncreaseStarToken {
                location,
                color,
                new_count,
            } => {
                let tile = state.tile_mut(*location);
                let star = tile
                    .star
                    .as_mut()
                    .filter(|star| star.color == *color)
                    .unwrap_or_else(|| panic!("no {color} star on {location}"));
                assert!(
                    matches!(star.nb_stars, 1 | 2) && *new_count == star.nb_stars + 1,
                    "cannot raise a {}-star token to {new_count}",
                    star.nb_stars
                );
                star.nb_stars = *new_count;
            }

            GameStateChange::ScorePoints { color, amount } => {
                state.player_mut(*color).score += amount;
            }

            GameStateChange::TakeLeaderCard { color, card } => {
                let cards = state.leader_cards_mut();
                let index = cards
                    .index_of(card)
                    .unwrap_or_else(|| panic!("{card} is not available"));
                cards.remove(index);

                let player = state.player_mut(*color);
                assert!(player.leader_card.is_none(), "{color} already holds a leader");
                player.leader_card = Some(*card);
            }

            GameStateChange::NextPlayer {
                advance_turn_counter,
            } => {
                let players = state.players_mut();
                let current = players
                    .iter()
                    .position(|p| p.is_current_player)
                    .unwrap_or_else(|| panic!("no current player"));
                let next = (current + 1) % players.len();
                players[current].is_current_player = false;
                players[next].is_current_player = true;
                if *advance_turn_counter {
                    state.count_turn();
                }
            }

            GameStateChange::SetPlayer(color) => {
                assert!(state.player_index(*color).is_some(), "{color} is not seated");
                for player in state.players_mut().iter_mut() {
                    player.is_current_player = player.color() == *color;
                }
            }

            GameStateChange::QueuePossibleActions(menu) => {
                state.set_possible_actions(Some(menu.as_ref().clone()));
            }

            GameStateChange::PrepareNextCentury => {
                let century = state.century();
                assert!(century < LAST_CENTURY, "no century after {century}");
                for tile in state.tiles_mut().iter_mut() {
                    let untouched = tile.architect.is_none() && tile.nb_filled_spots() == 0;
                    if !tile.building_facing && untouched && tile.tile.century <= century {
                        tile.building_facing = true;
                        tile.star = None;
                    }
                }
                state.start_next_century();
            }

            GameStateChange::FinishGame => state.finish(),

            GameStateChange::Composite(changes) => {
                for (i, change) in changes.iter().enumerate() {
                    debug_assert!(
                        i + 1 == changes.len() || !change.ends_with_queue(),
                        "a queued menu must end its chain"
                    );
                    change.apply_to(state);
                }
            }
        }
    }
}

fn remove_cubes(state: &mut GameState, count: u8, from: CubeLocation) {
    match from {
        CubeLocation::ActiveReserve(color) => {
            let player = state.player_mut(color);
            assert!(
                player.nb_active_cubes >= count,
                "{color} has {} active cubes, cannot move {count}",
                player.nb_active_cubes
            );
            player.nb_active_cubes -= count;
        }
        CubeLocation::PassiveReserve(color) => {
            let player = state.player_mut(color);
            assert!(
                player.nb_passive_cubes >= count,
                "{color} has {} passive cubes, cannot move {count}",
                player.nb_passive_cubes
            );
            player.nb_passive_cubes -= count;
        }
        CubeLocation::Zone { zone, color } => state.zone_mut(zone).remove(color, count),
        CubeLocation::TileSpot {
            location,
            spot,
            color,
        } => {
            let slot = &mut state.tile_mut(location).spots[usize::from(spot)];
            assert_eq!(*slot, Some(color), "spot {spot} of {location} holds no {color} cubes");
            *slot = None;
        }
    }
}

fn add_cubes(state: &mut GameState, count: u8, to: CubeLocation) {
    match to {
        CubeLocation::ActiveReserve(color) => state.player_mut(color).nb_active_cubes += count,
        CubeLocation::PassiveReserve(color) => state.player_mut(color).nb_passive_cubes += count,
        CubeLocation::Zone { zone, color } => state.zone_mut(zone).add(color, count),
        CubeLocation::TileSpot {
            location,
            spot,
            color,
        } => {
            let tile = state.tile_mut(location);
            assert!(tile.accepts_workers(), "tile {location} is not under construction");
            let slot = &mut tile.spots[usize::from(spot)];
            assert!(slot.is_none(), "spot {spot} of {location} is taken");
            *slot = Some(color);
        }
    }
}

fn remove_architect(state: &mut GameState, from: ArchitectLocation) {
    match from {
        ArchitectLocation::Held { holder, architect } => {
            let player = state.player_mut(holder);
            match architect {
                ArchitectColor::Player(color) => {
                    assert_eq!(color, holder, "{holder} cannot hold the {architect}");
                    assert!(player.is_holding_architect, "{holder} is not holding their architect");
                    player.is_holding_architect = false;
                }
                ArchitectColor::Neutral => {
                    assert!(
                        player.is_holding_neutral_architect,
                        "{holder} is not holding the neutral architect"
                    );
                    player.is_holding_neutral_architect = false;
                }
            }
        }
        ArchitectLocation::Tile {
            location,
            architect,
        } => {
            let tile = state.tile_mut(location);
            assert_eq!(tile.architect, Some(architect), "{architect} is not on {location}");
            tile.architect = None;
        }
        ArchitectLocation::OffBoard => {
            assert_eq!(
                state.neutral_architect(),
                NeutralArchitect::OffBoard,
                "neutral architect is not off the board"
            );
        }
    }
}

fn place_architect(state: &mut GameState, to: ArchitectLocation) {
    match to {
        ArchitectLocation::Held { holder, architect } => {
            let player = state.player_mut(holder);
            match architect {
                ArchitectColor::Player(color) => {
                    assert_eq!(color, holder, "{holder} cannot hold the {architect}");
                    assert!(!player.is_holding_architect, "{holder} already holds their architect");
                    player.is_holding_architect = true;
                }
                ArchitectColor::Neutral => {
                    assert!(
                        !player.is_holding_neutral_architect,
                        "{holder} already holds the neutral architect"
                    );
                    player.is_holding_neutral_architect = true;
                }
            }
        }
        ArchitectLocation::Tile {
            location,
            architect,
        } => {
            let century = state.century();
            let tile = state.tile_mut(location);
            assert!(
                tile.accepts_architect(century),
                "tile {location} cannot take an architect"
            );
            tile.architect = Some(architect);
        }
        ArchitectLocation::OffBoard => {}
    }
}
