//! Core engine types: players, dice, configuration, errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, DEFAULT_MAX_PLAYERS, DEFAULT_RESOLUTION_DELAY, MIN_PLAYERS};
pub use error::{BoardError, GameError};
pub use player::{Cell, PawnColor, Player, PlayerId, START_CELL};
pub use rng::{DiceRoll, GameRng, GameRngState};
