//! Board cell to 3D coordinate mapping.
//!
//! Cells run in a serpentine over a 10x10 grid: row `r = (cell - 1) / 10`
//! and column `c = (cell - 1) % 10`. Even rows run from z = 9 toward
//! z = -9, odd rows run back, and each row steps 2 units down the x axis.
//! Off-board cells rest beside the board.

use serde::{Deserialize, Serialize};

/// A 3D coordinate (x, y, z).
pub type Float3 = [f32; 3];

/// Cells per board row.
pub const ROW_LENGTH: i64 = 10;

/// Geometry of the rendered board.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// x of the first row.
    pub x_start: f32,
    /// Constant pawn height.
    pub y: f32,
    /// Distance between neighboring cells along both axes.
    pub step: f32,
    /// z of the first cell in an even row.
    pub z_edge: f32,
    /// Resting spot for pawns that are not on the board.
    pub off_board: Float3,
    /// Highest valid cell.
    pub last_cell: i64,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            x_start: 9.0,
            y: -2.5,
            step: 2.0,
            z_edge: 9.0,
            off_board: [12.0, -2.5, 10.0],
            last_cell: 100,
        }
    }
}

impl BoardLayout {
    /// Map a cell to its coordinate. Total over all integers.
    ///
    /// ```
    /// use ladders::board::BoardLayout;
    ///
    /// let layout = BoardLayout::default();
    /// assert_eq!(layout.coordinate_for(1), [9.0, -2.5, 9.0]);
    /// assert_eq!(layout.coordinate_for(11), [7.0, -2.5, -9.0]);
    /// assert_eq!(layout.coordinate_for(0), [12.0, -2.5, 10.0]);
    /// ```
    #[must_use]
    pub fn coordinate_for(&self, cell: i64) -> Float3 {
        if cell < 1 || cell > self.last_cell {
            return self.off_board;
        }

        let row = (cell - 1) / ROW_LENGTH;
        let column = (cell - 1) % ROW_LENGTH;

        let x = self.x_start - row as f32 * self.step;
        let z = if row % 2 == 0 {
            self.z_edge - column as f32 * self.step
        } else {
            -self.z_edge + column as f32 * self.step
        };

        [x, self.y, z]
    }
}

/// Coordinate of `cell` on the default board layout.
#[must_use]
pub fn coordinate_for_position(cell: i64) -> Float3 {
    BoardLayout::default().coordinate_for(cell)
}

/// Rotation that brings a die face to the top.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiceRotation {
    /// Rotation angle in radians.
    pub angle_rad: f32,
    /// Unit rotation axis.
    pub axis: Float3,
}

/// Orientation for a rolled face, or `None` for a face outside `1..=6`.
#[must_use]
pub fn dice_rotation(face: u8) -> Option<DiceRotation> {
    use std::f32::consts::{FRAC_PI_2, PI};

    const X: Float3 = [1.0, 0.0, 0.0];
    const Y: Float3 = [0.0, 1.0, 0.0];
    const Z: Float3 = [0.0, 0.0, 1.0];

    let (angle_rad, axis) = match face {
        1 => (PI, Y),
        2 => (FRAC_PI_2, Z),
        3 => (FRAC_PI_2, X),
        4 => (-FRAC_PI_2, X),
        5 => (-FRAC_PI_2, Z),
        6 => (PI, X),
        _ => return None,
    };

    Some(DiceRotation { angle_rad, axis })
}
