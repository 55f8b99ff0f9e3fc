//! Player identification and pawn data.
//!
//! ## PlayerId
//!
//! Roster index of a player. Insertion order is turn order, so the
//! first player added is `PlayerId(0)` and moves first.
//!
//! ## Player
//!
//! Display name, pawn color, and the board cell the pawn stands on.
//! Cell 0 means the pawn has not entered the board yet.

use serde::{Deserialize, Serialize};

/// A board cell. `0` is off-board, `1..=100` are playable cells.
pub type Cell = u8;

/// The off-board starting cell.
pub const START_CELL: Cell = 0;

/// Roster index of a player (0-based, also the turn order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw roster index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player whose turn follows this one in a roster of `player_count`.
    ///
    /// ```
    /// use ladders::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(2), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(1).next(2), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        Self(((self.index() + 1) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Pawn color. Doubles as the rendering key for the pawn model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PawnColor {
    Red,
    Blue,
    Yellow,
    Green,
}

impl PawnColor {
    /// All pawn colors, in the order the board offers them.
    pub const ALL: [PawnColor; 4] = [Self::Red, Self::Blue, Self::Yellow, Self::Green];

    /// Lowercase name, matching the pawn asset keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }
}

impl std::fmt::Display for PawnColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A player on the roster.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Display label.
    pub name: String,

    /// Pawn color.
    pub color: PawnColor,

    /// Current cell, within `[0, winning_cell]`.
    pub position: Cell,
}

impl Player {
    /// Create a player standing off-board.
    pub fn new(name: impl Into<String>, color: PawnColor) -> Self {
        Self {
            name: name.into(),
            color,
            position: START_CELL,
        }
    }

    /// Place the pawn on a cell (builder pattern).
    #[must_use]
    pub fn at(mut self, position: Cell) -> Self {
        self.position = position;
        self
    }

    /// Has this pawn entered the board?
    #[must_use]
    pub fn on_board(&self) -> bool {
        self.position != START_CELL
    }

    /// Send the pawn back to the start.
    pub fn send_home(&mut self) {
        self.position = START_CELL;
    }
}
