//! Core types: player colors, influence zones, leader cards, configuration,
//! messages, errors and randomness.
//!
//! Everything here is plain data shared by the board, the state model and
//! the rule engine.

pub mod config;
pub mod error;
pub mod influence;
pub mod message;
pub mod player;
pub mod rng;

pub use config::{starting_cubes, GameConfig, LAST_CENTURY, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{PlayError, SetupError};
pub use influence::{InfluenceColor, LeaderCard, NB_INFLUENCE_ZONES};
pub use message::{Message, MessageKind, MessageParam};
pub use player::{ArchitectColor, Player, PlayerColor, NB_PLAYER_COLORS};
pub use rng::{GameRng, NoShuffle, Shuffler};
