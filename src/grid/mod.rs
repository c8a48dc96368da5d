// src/grid/mod.rs
pub mod cell;
pub mod state;

pub use cell::{CellState, Direction, GridPos};
pub use state::GridState;

use thiserror::Error;

/// Errors raised by direct grid access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell {pos} is outside the {columns}x{rows} grid")]
    OutOfBounds {
        pos: GridPos,
        columns: usize,
        rows: usize,
    },
    #[error("cell {pos} cannot go from {from:?} back to {to:?}")]
    InvalidTransition {
        pos: GridPos,
        from: CellState,
        to: CellState,
    },
}
