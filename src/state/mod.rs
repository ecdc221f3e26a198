//! Game state model.
//!
//! - `GameState`: the snapshot-copyable aggregate
//! - `PlayerState`: cubes, architects, leader card and score per player
//! - `TileState`: one per valid board location
//! - `InfluenceZoneState`: cube bank per influence zone

mod game_state;
mod player_state;
mod tile_state;
mod zone_state;

pub use game_state::{GameState, NeutralArchitect};
pub use player_state::PlayerState;
pub use tile_state::{StarToken, TileState, NB_SPOTS};
pub use zone_state::InfluenceZoneState;
