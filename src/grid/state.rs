// src/grid/state.rs

use super::cell::{CellState, Direction, GridPos};
use super::GridError;

/// The two co-indexed arrays of a generation run: per-cell placement state
/// and the handle of the piece placed there.
///
/// Storage is column-major (`col * rows + row`) so that iterating the backing
/// vector visits cells in the same order the selector scans them.
#[derive(Debug, Clone)]
pub struct GridState<H> {
    columns: usize,
    rows: usize,
    states: Vec<CellState>,
    pieces: Vec<Option<H>>,
}

impl<H> GridState<H> {
    /// Creates a fully `Empty` grid. Callers validate dimensions beforehand.
    pub fn new(columns: usize, rows: usize) -> Self {
        let len = columns * rows;
        let mut pieces = Vec::with_capacity(len);
        pieces.resize_with(len, || None);
        Self {
            columns,
            rows,
            states: vec![CellState::Empty; len],
            pieces,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        pos.col < self.columns && pos.row < self.rows
    }

    fn index(&self, pos: GridPos) -> Result<usize, GridError> {
        if self.contains(pos) {
            Ok(pos.col * self.rows + pos.row)
        } else {
            Err(GridError::OutOfBounds {
                pos,
                columns: self.columns,
                rows: self.rows,
            })
        }
    }

    pub fn get(&self, pos: GridPos) -> Result<CellState, GridError> {
        let idx = self.index(pos)?;
        Ok(self.states[idx])
    }

    /// Updates a cell's state. Backward transitions are rejected.
    pub fn set(&mut self, pos: GridPos, state: CellState) -> Result<(), GridError> {
        let idx = self.index(pos)?;
        let current = self.states[idx];
        if !current.can_become(state) {
            return Err(GridError::InvalidTransition {
                pos,
                from: current,
                to: state,
            });
        }
        self.states[idx] = state;
        Ok(())
    }

    /// Handle of the piece at `pos`, if the cell is in bounds and filled.
    pub fn piece(&self, pos: GridPos) -> Option<&H> {
        let idx = self.index(pos).ok()?;
        self.pieces[idx].as_ref()
    }

    pub fn set_piece(&mut self, pos: GridPos, piece: H) -> Result<(), GridError> {
        let idx = self.index(pos)?;
        self.pieces[idx] = Some(piece);
        Ok(())
    }

    /// The in-bounds neighbour of `pos` in `dir`, or `None` at the grid edge.
    pub fn neighbor(&self, pos: GridPos, dir: Direction) -> Option<GridPos> {
        let (dc, dr) = dir.delta();
        let col = pos.col.checked_add_signed(dc as isize)?;
        let row = pos.row.checked_add_signed(dr as isize)?;
        let next = GridPos::new(col, row);
        self.contains(next).then_some(next)
    }

    /// All positions in column-major ascending order.
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        (0..self.columns).flat_map(move |col| (0..self.rows).map(move |row| GridPos::new(col, row)))
    }

    pub fn count(&self, state: CellState) -> usize {
        self.states.iter().filter(|s| **s == state).count()
    }
}
