//! Deterministic dice for the move sequence.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same rolls
//! - **Jittered**: Each roll carries a small fractional part so two rolls
//!   of the same face are distinguishable downstream (animation triggers)
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use ladders::core::GameRng;
//!
//! let mut dice = GameRng::new(7);
//! let roll = dice.roll_die();
//!
//! assert!((1..=6).contains(&roll.face()));
//! assert!(roll.jitter() < 0.1);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// Upper bound (exclusive) of the fractional jitter added to each roll.
pub const ROLL_JITTER: f64 = 0.1;

/// A single dice roll: integer face plus a jitter in `[0, 0.1)`.
///
/// Only the face has game-logic meaning.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct DiceRoll(f64);

impl DiceRoll {
    /// Build a roll from a face and a jitter.
    #[must_use]
    pub fn new(face: u8, jitter: f64) -> Self {
        assert!((1..=DIE_FACES).contains(&face), "Die face must be 1-6");
        assert!((0.0..ROLL_JITTER).contains(&jitter), "Jitter must be in [0, 0.1)");
        Self(f64::from(face) + jitter)
    }

    /// A roll of exactly `face`, with no jitter.
    #[must_use]
    pub fn exact(face: u8) -> Self {
        Self::new(face, 0.0)
    }

    /// The die face (floor of the value).
    #[must_use]
    pub fn face(self) -> u8 {
        self.0.floor() as u8
    }

    /// The fractional jitter.
    #[must_use]
    pub fn jitter(self) -> f64 {
        self.0 - self.0.floor()
    }

    /// The raw emitted value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// Seeded dice RNG.
///
/// Uses ChaCha8 so a session replays identically from the same seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll a uniform face in `1..=6`.
    pub fn roll_face(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    /// Roll a face and attach a jitter in `[0, 0.1)`.
    pub fn roll_die(&mut self) -> DiceRoll {
        let face = self.roll_face();
        let jitter = self.inner.gen_range(0.0..ROLL_JITTER);
        DiceRoll::new(face, jitter)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
