//! Game event types.
//!
//! The session fires two kinds of events. Presentation code (pawn
//! animation, scoreboard text), logging and analytics subscribe to
//! them instead of polling state.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Player, PlayerId};

/// Event kind a listener subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A pawn was captured and sent home.
    PlayerKilled,
    /// A pawn reached the winning cell.
    GameFinish,
}

impl EventKind {
    /// Wire name of the event.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlayerKilled => "player_killed",
            Self::GameFinish => "game_finish",
        }
    }

    /// Look up a kind by its wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "player_killed" => Some(Self::PlayerKilled),
            "game_finish" => Some(Self::GameFinish),
            _ => None,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fired event with its payload.
///
/// Player payloads are snapshots taken when the event fires.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// `player` was captured by `by` on `cell`. `player` still shows the
    /// captured position; the pawn is sent home right after.
    PlayerKilled {
        player_id: PlayerId,
        player: Player,
        by_id: PlayerId,
        by: Player,
        cell: Cell,
    },
    /// `player` reached the winning cell.
    GameFinish { player_id: PlayerId, player: Player },
}

impl GameEvent {
    /// The kind of this event.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::PlayerKilled { .. } => EventKind::PlayerKilled,
            Self::GameFinish { .. } => EventKind::GameFinish,
        }
    }

    /// The player the event is about (captured pawn or winner).
    #[must_use]
    pub fn player(&self) -> &Player {
        match self {
            Self::PlayerKilled { player, .. } | Self::GameFinish { player, .. } => player,
        }
    }
}
