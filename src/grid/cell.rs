// src/grid/cell.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placement state of a single grid cell.
///
/// Cells only ever move forward: `Empty -> Eligible -> Filled`. The seed cell
/// is the one exception and goes straight from `Empty` to `Filled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Empty,
    Eligible,
    Filled,
}

impl CellState {
    fn rank(self) -> u8 {
        match self {
            CellState::Empty => 0,
            CellState::Eligible => 1,
            CellState::Filled => 2,
        }
    }

    /// Whether moving from `self` to `next` keeps the forward-only ordering.
    /// Re-setting the same state is allowed.
    pub fn can_become(self, next: CellState) -> bool {
        next.rank() >= self.rank()
    }
}

/// Integer (column, row) coordinate of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub col: usize,
    pub row: usize,
}

impl GridPos {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Signed `(Δcol, Δrow)` from `from` to `self`.
    pub fn delta_from(&self, from: GridPos) -> (i32, i32) {
        (
            self.col as i32 - from.col as i32,
            self.row as i32 - from.row as i32,
        )
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// The four orthogonal neighbour directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// +column
    East,
    /// -column
    West,
    /// +row
    North,
    /// -row
    South,
}

impl Direction {
    /// Scan order used by the frontier scan: +col, -col, +row, -row.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::North,
        Direction::South,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::North => (0, 1),
            Direction::South => (0, -1),
        }
    }

    /// Quarter turn clockwise as seen from above: (Δcol, Δrow) -> (Δrow, -Δcol).
    pub fn turned_clockwise(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }
}
