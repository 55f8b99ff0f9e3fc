//! Turn-based game-state engine.
//!
//! [`GameSession`] owns the roster, turn order, dice, and lifecycle flags,
//! and runs the move sequence. Presentation code drives it with
//! `roll_dice` and per-frame `tick` calls and reads it through
//! [`GameSnapshot`].
//!
//! ```
//! use std::time::Duration;
//!
//! use ladders::core::{DiceRoll, GameConfig, PlayerId};
//! use ladders::engine::GameSession;
//!
//! let mut session = GameSession::new(GameConfig::new(42));
//! session.start_game();
//!
//! // Red rolls a 4 and lands on the ladder at 4
//! session.roll_with(DiceRoll::exact(4)).unwrap();
//! assert_eq!(session.players()[0].position, 4);
//!
//! // One second later the ladder carries the pawn to 25
//! let record = session.tick(Duration::from_secs(1)).unwrap();
//! assert_eq!(record.to, 25);
//! assert_eq!(session.current_player(), PlayerId::new(1));
//! ```

mod pending;
mod session;
mod snapshot;

pub use pending::{MoveRecord, PendingMove};
pub use session::GameSession;
pub use snapshot::GameSnapshot;
