// src/generator/selector.rs

use crate::grid::{CellState, GridPos, GridState};

/// First `Eligible` cell in column-major ascending order, or `None` when the
/// frontier is exhausted.
pub fn find_next_eligible<H>(grid: &GridState<H>) -> Option<GridPos> {
    grid.positions()
        .find(|pos| matches!(grid.get(*pos), Ok(CellState::Eligible)))
}
