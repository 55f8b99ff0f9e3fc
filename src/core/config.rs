//! Session configuration.
//!
//! Sessions are configured at startup with a `GameConfig`:
//! - roster limits
//! - the board (and with it the winning cell)
//! - the capture switch
//! - the resolution delay between provisional move and commit
//! - the dice seed

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::player::Cell;
use crate::board::Board;

/// Default resolution delay (the presentation layer's animation window).
pub const DEFAULT_RESOLUTION_DELAY: Duration = Duration::from_secs(1);

/// Default roster limit.
pub const DEFAULT_MAX_PLAYERS: usize = 4;

/// Smallest roster a session can be built with.
pub const MIN_PLAYERS: usize = 2;

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Maximum roster size; `add_player` beyond this is ignored.
    pub max_players: usize,

    /// Board with ladders and snakes.
    pub board: Board,

    /// Landing on an occupied cell sends the other pawns home.
    pub capture_enabled: bool,

    /// Delay between the provisional move and its resolution.
    #[serde(with = "duration_millis")]
    pub resolution_delay: Duration,

    /// Dice seed.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_players: DEFAULT_MAX_PLAYERS,
            board: Board::classic(),
            capture_enabled: true,
            resolution_delay: DEFAULT_RESOLUTION_DELAY,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Create the default configuration with a dice seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Set the roster limit.
    #[must_use]
    pub fn with_max_players(mut self, max: usize) -> Self {
        assert!(max >= MIN_PLAYERS, "Must allow at least 2 players");
        assert!(max <= 255, "At most 255 players supported");
        self.max_players = max;
        self
    }

    /// Replace the board.
    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Enable or disable captures.
    #[must_use]
    pub fn with_capture(mut self, enabled: bool) -> Self {
        self.capture_enabled = enabled;
        self
    }

    /// Set the resolution delay.
    #[must_use]
    pub fn with_resolution_delay(mut self, delay: Duration) -> Self {
        self.resolution_delay = delay;
        self
    }

    /// Set the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The winning cell of the configured board.
    #[must_use]
    pub fn winning_cell(&self) -> Cell {
        self.board.winning_cell()
    }
}

pub(crate) mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Transition;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.max_players, 4);
        assert!(config.capture_enabled);
        assert_eq!(config.resolution_delay, Duration::from_secs(1));
        assert_eq!(config.winning_cell(), 100);
        assert_eq!(config.board, Board::classic());
    }

    #[test]
    fn test_config_builder() {
        let board = Board::new(30, [Transition::ladder(2, 12)]).unwrap();
        let config = GameConfig::new(7)
            .with_max_players(3)
            .with_board(board)
            .with_capture(false)
            .with_resolution_delay(Duration::from_millis(250));

        assert_eq!(config.seed, 7);
        assert_eq!(config.max_players, 3);
        assert_eq!(config.winning_cell(), 30);
        assert!(!config.capture_enabled);
        assert_eq!(config.resolution_delay, Duration::from_millis(250));
    }

    #[test]
    #[should_panic(expected = "Must allow at least 2 players")]
    fn test_config_rejects_single_player_limit() {
        let _ = GameConfig::default().with_max_players(1);
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::new(11).with_resolution_delay(Duration::from_millis(1500));
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"resolution_delay\":1500"));

        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
