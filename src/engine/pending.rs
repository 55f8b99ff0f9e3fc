//! In-flight and resolved moves.
//!
//! A roll first produces a `PendingMove`: the pawn already stands on its
//! provisional cell while the presentation layer animates. Once the
//! resolution delay has elapsed the move is resolved into a `MoveRecord`.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::duration_millis;
use crate::core::{Cell, DiceRoll, PlayerId};

/// A rolled move waiting for resolution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingMove {
    /// The moving player.
    pub player: PlayerId,

    /// The roll that produced this move.
    pub roll: DiceRoll,

    /// Cell before the roll.
    pub from: Cell,

    /// Cell after adding the face, before snakes and ladders.
    /// Equal to `from` when the move overshot the winning cell.
    pub provisional: Cell,

    /// The roll would have passed the winning cell; the pawn stays put.
    pub overshoot: bool,

    /// Time accumulated since the roll.
    #[serde(with = "duration_millis")]
    pub elapsed: Duration,
}

impl PendingMove {
    /// Time left until resolution under `delay`.
    #[must_use]
    pub fn remaining(&self, delay: Duration) -> Duration {
        delay.saturating_sub(self.elapsed)
    }

    /// Has the resolution delay elapsed?
    #[must_use]
    pub fn is_due(&self, delay: Duration) -> bool {
        self.elapsed >= delay
    }
}

/// A resolved move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The moving player.
    pub player: PlayerId,

    /// The roll.
    pub roll: DiceRoll,

    /// Cell before the roll.
    pub from: Cell,

    /// Cell after adding the face.
    pub provisional: Cell,

    /// Cell after snakes and ladders.
    pub to: Cell,

    /// The roll overshot the winning cell and was rejected.
    pub overshoot: bool,

    /// Players sent home by this move, in roster order.
    pub captured: SmallVec<[PlayerId; 3]>,

    /// The move reached the winning cell.
    pub won: bool,

    /// Whose turn it is after this move.
    pub next_player: PlayerId,
}

impl MoveRecord {
    /// Did the move land on a ladder?
    #[must_use]
    pub fn climbed(&self) -> bool {
        self.to > self.provisional
    }

    /// Did the move land on a snake?
    #[must_use]
    pub fn slid(&self) -> bool {
        self.to < self.provisional
    }
}
