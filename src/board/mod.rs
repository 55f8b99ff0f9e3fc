//! Board model: special cells and rendered geometry.
//!
//! - `topology`: ladders, snakes, and single-step resolution
//! - `layout`: pure cell -> coordinate mapping for the presentation layer

pub mod layout;
pub mod topology;

pub use layout::{coordinate_for_position, dice_rotation, BoardLayout, DiceRotation, Float3};
pub use topology::{Board, Transition, TransitionKind, WINNING_CELL};
