// src/scene/mod.rs
//! The world the generator places pieces into.
//!
//! The generator never renders or collides anything itself. It asks a
//! [`Scene`] to create pieces, to turn them, and whether a world slot is
//! already physically taken.

pub mod connector;
#[cfg(test)]
pub mod mock;

pub use connector::{ConnectorScene, PieceId, ScenePiece};

use crate::config::Prefab;
use crate::generator::Rotation;
use crate::grid::GridPos;
use crate::utils::WorldPosition;

pub trait Scene {
    /// Handle to a piece living in the scene.
    type Handle: Clone + std::fmt::Debug;

    /// Creates a piece from `prefab` at `at` with identity orientation.
    fn instantiate(&mut self, prefab: &Prefab, at: WorldPosition) -> Self::Handle;

    /// True when something physical lies within `radius` of `at`.
    fn is_occupied_near(&self, at: WorldPosition, radius: f32) -> bool;

    /// Turns `piece` about the vertical axis, on top of its current orientation.
    fn rotate(&mut self, piece: &Self::Handle, rotation: Rotation);
}

/// World position of a cell centre: `(col * spacing, 0, row * spacing)`.
pub fn cell_to_world(pos: GridPos, spacing: f32) -> WorldPosition {
    WorldPosition::new(pos.col as f32 * spacing, 0.0, pos.row as f32 * spacing)
}
