//! Board topology: ladders and snakes.
//!
//! Each cell is the source of at most one transition. A lookup applies a
//! single transition and never follows the exit cell further, so a ladder
//! that ends on a snake head leaves the pawn on the snake head.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::BoardError;
use crate::core::player::Cell;

/// Default winning cell on a 10x10 board.
pub const WINNING_CELL: Cell = 100;

const CLASSIC_LADDERS: [(Cell, Cell); 9] = [
    (4, 25),
    (8, 29),
    (13, 46),
    (33, 49),
    (42, 63),
    (50, 69),
    (62, 81),
    (67, 86),
    (74, 92),
];

const CLASSIC_SNAKES: [(Cell, Cell); 6] = [
    (27, 5),
    (40, 3),
    (43, 18),
    (54, 31),
    (76, 58),
    (89, 53),
];

/// Kind of special cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionKind {
    Ladder,
    Snake,
}

/// A special cell pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    /// Entry cell.
    pub from: Cell,
    /// Exit cell.
    pub to: Cell,
    /// Ladder or snake.
    pub kind: TransitionKind,
}

impl Transition {
    /// Create a ladder.
    #[must_use]
    pub const fn ladder(from: Cell, to: Cell) -> Self {
        Self {
            from,
            to,
            kind: TransitionKind::Ladder,
        }
    }

    /// Create a snake.
    #[must_use]
    pub const fn snake(from: Cell, to: Cell) -> Self {
        Self {
            from,
            to,
            kind: TransitionKind::Snake,
        }
    }
}

/// Board with its special cells.
///
/// Deserialization goes through `Board::new`, so a loaded board is
/// validated like a constructed one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr", into = "BoardRepr")]
pub struct Board {
    winning_cell: Cell,
    transitions: FxHashMap<Cell, Transition>,
}

impl Board {
    /// Build a validated board.
    ///
    /// Entry cells must lie in `[1, winning_cell)` and exit cells in
    /// `[1, winning_cell]`. No cell may start two transitions, ladders must
    /// climb and snakes must descend.
    pub fn new(
        winning_cell: Cell,
        transitions: impl IntoIterator<Item = Transition>,
    ) -> Result<Self, BoardError> {
        let mut board = Self::empty(winning_cell);

        for transition in transitions {
            board.validate(&transition)?;
            board.transitions.insert(transition.from, transition);
        }

        Ok(board)
    }

    /// A board with no special cells.
    #[must_use]
    pub fn empty(winning_cell: Cell) -> Self {
        assert!(winning_cell > 0, "Winning cell must be on the board");
        Self {
            winning_cell,
            transitions: FxHashMap::default(),
        }
    }

    /// The classic board: 10 ladders and 6 snakes.
    ///
    /// The 95 -> 99 shortcut climbs, so it is a ladder.
    #[must_use]
    pub fn classic() -> Self {
        let mut board = Self::empty(WINNING_CELL);

        let ladders = CLASSIC_LADDERS
            .iter()
            .chain(std::iter::once(&(95, 99)))
            .map(|&(from, to)| Transition::ladder(from, to));
        let snakes = CLASSIC_SNAKES
            .iter()
            .map(|&(from, to)| Transition::snake(from, to));

        for transition in ladders.chain(snakes) {
            board.transitions.insert(transition.from, transition);
        }

        board
    }

    fn validate(&self, transition: &Transition) -> Result<(), BoardError> {
        let Transition { from, to, kind } = *transition;

        for cell in [from, to] {
            if cell == 0 || cell > self.winning_cell {
                return Err(BoardError::CellOutOfRange {
                    cell,
                    winning_cell: self.winning_cell,
                });
            }
        }

        if from == self.winning_cell {
            return Err(BoardError::SourceIsWinningCell { cell: from });
        }

        if self.transitions.contains_key(&from) {
            return Err(BoardError::DuplicateSource { cell: from });
        }

        match kind {
            TransitionKind::Ladder if to <= from => Err(BoardError::LadderGoesDown { from, to }),
            TransitionKind::Snake if to >= from => Err(BoardError::SnakeGoesUp { from, to }),
            _ => Ok(()),
        }
    }

    /// The winning cell.
    #[must_use]
    pub fn winning_cell(&self) -> Cell {
        self.winning_cell
    }

    /// The transition starting at `cell`, if any.
    #[must_use]
    pub fn transition_at(&self, cell: Cell) -> Option<&Transition> {
        self.transitions.get(&cell)
    }

    /// Apply at most one transition to `cell`.
    #[must_use]
    pub fn resolve(&self, cell: Cell) -> Cell {
        self.transition_at(cell).map_or(cell, |t| t.to)
    }

    /// All ladders, ordered by entry cell.
    pub fn ladders(&self) -> Vec<Transition> {
        self.sorted_of(TransitionKind::Ladder)
    }

    /// All snakes, ordered by entry cell.
    pub fn snakes(&self) -> Vec<Transition> {
        self.sorted_of(TransitionKind::Snake)
    }

    fn sorted_of(&self, kind: TransitionKind) -> Vec<Transition> {
        let mut out: Vec<_> = self
            .transitions
            .values()
            .filter(|t| t.kind == kind)
            .copied()
            .collect();
        out.sort_by_key(|t| t.from);
        out
    }

    /// Total number of special cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Does the board have no special cells?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

/// Wire form of a board: transitions ordered by entry cell.
#[derive(Serialize, Deserialize)]
struct BoardRepr {
    winning_cell: Cell,
    transitions: Vec<Transition>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        if repr.winning_cell == 0 {
            return Err(BoardError::CellOutOfRange {
                cell: 0,
                winning_cell: 0,
            });
        }
        Board::new(repr.winning_cell, repr.transitions)
    }
}

impl From<Board> for BoardRepr {
    fn from(board: Board) -> Self {
        let mut transitions: Vec<_> = board.transitions.into_values().collect();
        transitions.sort_by_key(|t| t.from);
        Self {
            winning_cell: board.winning_cell,
            transitions,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::classic()
    }
}
