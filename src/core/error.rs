//! Error types.
//!
//! `GameError` covers commands whose preconditions are not met. Every
//! such command leaves the session untouched, so callers that only want
//! the casual "silently ignored" behavior can drop the error.
//!
//! `BoardError` covers invalid custom board definitions.

use thiserror::Error;

use super::player::Cell;

/// A session command was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The roster already holds the maximum number of players.
    #[error("roster is full ({max} players)")]
    RosterFull {
        /// Configured roster limit.
        max: usize,
    },

    /// Dice were rolled before the game started.
    #[error("game has not started")]
    NotStarted,

    /// Dice were rolled while the previous move is still resolving.
    #[error("a move is still resolving")]
    MovePending,

    /// Dice were rolled after a player reached the winning cell.
    #[error("game is already finished")]
    GameFinished,

    /// A resolution was requested with no move in flight.
    #[error("no move is pending")]
    NoPendingMove,
}

/// A custom board definition is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A transition endpoint lies outside `[1, winning_cell]`.
    #[error("cell {cell} is outside the board (1..={winning_cell})")]
    CellOutOfRange { cell: Cell, winning_cell: Cell },

    /// Two transitions start from the same cell.
    #[error("cell {cell} is the source of more than one transition")]
    DuplicateSource { cell: Cell },

    /// A ladder does not lead upward.
    #[error("ladder {from} -> {to} does not climb")]
    LadderGoesDown { from: Cell, to: Cell },

    /// A snake does not lead downward.
    #[error("snake {from} -> {to} does not descend")]
    SnakeGoesUp { from: Cell, to: Cell },

    /// The winning cell cannot start a transition.
    #[error("winning cell {cell} cannot start a transition")]
    SourceIsWinningCell { cell: Cell },
}
