// src/generator/scanner.rs

use log::trace;

use crate::grid::{CellState, Direction, GridError, GridPos, GridState};
use crate::scene::{cell_to_world, Scene};

/// How neighbouring slots are checked in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotCheck {
    pub spacing: f32,
    pub radius: f32,
}

/// Checks the four orthogonal neighbours of `center` and marks every in-bounds,
/// not-yet-filled neighbour whose world slot the scene reports occupied as
/// `Eligible`. Off-grid neighbours are skipped.
///
/// Returns the cells that went from `Empty` to `Eligible`.
pub fn scan_neighbors<H, S>(
    grid: &mut GridState<H>,
    scene: &S,
    center: GridPos,
    check: SlotCheck,
) -> Result<Vec<GridPos>, GridError>
where
    S: Scene + ?Sized,
{
    let mut discovered = Vec::new();
    for dir in Direction::ALL {
        let Some(neighbor) = grid.neighbor(center, dir) else {
            continue;
        };
        let at = cell_to_world(neighbor, check.spacing);
        if !scene.is_occupied_near(at, check.radius) {
            continue;
        }
        match grid.get(neighbor)? {
            CellState::Filled | CellState::Eligible => {}
            CellState::Empty => {
                grid.set(neighbor, CellState::Eligible)?;
                trace!("Cell {} is now eligible (seen from {})", neighbor, center);
                discovered.push(neighbor);
            }
        }
    }
    Ok(discovered)
}
