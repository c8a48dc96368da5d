// src/scene/connector.rs
//! In-memory scene where every piece reaches into the neighbouring slots it
//! opens onto, the way a prefab's connector colliders would.

use log::trace;

use super::Scene;
use crate::config::{PieceCategory, Prefab};
use crate::generator::Rotation;
use crate::grid::Direction;
use crate::utils::WorldPosition;

/// Openings of a category at identity rotation.
pub fn base_openings(category: &PieceCategory) -> &'static [Direction] {
    match category {
        PieceCategory::Corridor => &[Direction::North, Direction::South],
        PieceCategory::Corner => &[Direction::North, Direction::East],
        PieceCategory::TJunction => &[Direction::North, Direction::East, Direction::West],
        PieceCategory::EndCap => &[Direction::North],
        PieceCategory::Other(_) => &[],
    }
}

/// Openings of a category after turning it by `rotation`.
pub fn openings(category: &PieceCategory, rotation: Rotation) -> Vec<Direction> {
    base_openings(category)
        .iter()
        .map(|dir| rotation.apply(*dir))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(pub usize);

#[derive(Debug, Clone)]
pub struct ScenePiece {
    pub category: PieceCategory,
    pub visual: String,
    pub position: WorldPosition,
    pub rotation: Rotation,
}

impl ScenePiece {
    /// The piece's own centre followed by one point per opening, each a full
    /// grid step away.
    pub fn contact_points(&self, spacing: f32) -> Vec<WorldPosition> {
        let mut points = vec![self.position];
        for dir in openings(&self.category, self.rotation) {
            let (dc, dr) = dir.delta();
            points.push(self.position.offset(dc as f32 * spacing, dr as f32 * spacing));
        }
        points
    }
}

#[derive(Debug, Clone)]
pub struct ConnectorScene {
    spacing: f32,
    pieces: Vec<ScenePiece>,
}

impl ConnectorScene {
    pub fn new(spacing: f32) -> Self {
        Self {
            spacing,
            pieces: Vec::new(),
        }
    }

    pub fn piece(&self, id: PieceId) -> Option<&ScenePiece> {
        self.pieces.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

impl Scene for ConnectorScene {
    type Handle = PieceId;

    fn instantiate(&mut self, prefab: &Prefab, at: WorldPosition) -> PieceId {
        let id = PieceId(self.pieces.len());
        trace!("Spawning {} ({}) at {:?}", prefab.visual, prefab.category, at);
        self.pieces.push(ScenePiece {
            category: prefab.category.clone(),
            visual: prefab.visual.clone(),
            position: at,
            rotation: Rotation::Rot0,
        });
        id
    }

    fn is_occupied_near(&self, at: WorldPosition, radius: f32) -> bool {
        self.pieces.iter().any(|piece| {
            piece
                .contact_points(self.spacing)
                .iter()
                .any(|point| point.distance_to(&at) <= radius)
        })
    }

    fn rotate(&mut self, piece: &PieceId, rotation: Rotation) {
        if let Some(p) = self.pieces.get_mut(piece.0) {
            p.rotation = p.rotation + rotation;
        }
    }
}
