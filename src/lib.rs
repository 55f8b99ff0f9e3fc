//! # ladders
//!
//! Turn-based Snakes & Ladders game-state engine.
//!
//! ## Design Principles
//!
//! 1. **Engine Owns State**: Roster, positions, turn, dice and lifecycle
//!    flags change only through `GameSession` commands.
//!
//! 2. **Events Over Polling**: Captures and wins are announced through an
//!    event notifier; the engine knows nothing about its observers.
//!
//! 3. **Explicit Time**: The delay between a provisional move and its
//!    resolution is advanced by the caller (`tick`), never by a wall clock.
//!
//! ## Modules
//!
//! - `core`: Players, dice, configuration, errors
//! - `board`: Ladders and snakes, cell -> coordinate mapping
//! - `events`: Event kinds, payloads, and the notifier
//! - `engine`: The game session and its move sequence

pub mod board;
pub mod core;
pub mod engine;
pub mod events;

// Re-export commonly used types
pub use crate::core::{
    BoardError, Cell, DiceRoll, GameConfig, GameError, GameRng, PawnColor, Player, PlayerId,
};

pub use crate::board::{coordinate_for_position, Board, BoardLayout, Transition, TransitionKind};

pub use crate::events::{EventKind, EventNotifier, GameEvent, Subscription};

pub use crate::engine::{GameSession, GameSnapshot, MoveRecord, PendingMove};
