//! Read model for the presentation layer.
//!
//! Cloning the roster is O(1) thanks to `im`, so the render loop can take
//! a snapshot every frame.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::pending::PendingMove;
use crate::board::{BoardLayout, Float3};
use crate::core::{DiceRoll, GameRngState, PawnColor, Player, PlayerId};

/// Observable session state.
///
/// Carries the dice position too, so a session restored from a snapshot
/// rolls exactly what the original would have rolled next.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub players: Vector<Player>,
    pub dice_roll: Option<DiceRoll>,
    pub current_player: PlayerId,
    pub started: bool,
    pub winner: Option<PlayerId>,
    pub pending: Option<PendingMove>,
    pub rng: GameRngState,
}

impl GameSnapshot {
    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> Option<&Player> {
        self.players.get(self.current_player.index())
    }

    /// Where each pawn should be drawn, in roster order.
    pub fn pawn_coordinates(&self, layout: &BoardLayout) -> Vec<(PawnColor, Float3)> {
        self.players
            .iter()
            .map(|p| (p.color, layout.coordinate_for(i64::from(p.position))))
            .collect()
    }
}
