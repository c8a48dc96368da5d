// src/utils/geometry.rs

use serde::{Deserialize, Serialize};

/// A point in the scene's world space. `y` is the vertical axis; the grid
/// lies on the `x`/`z` plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldPosition {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn distance_to(&self, other: &WorldPosition) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Moves the point along the ground plane.
    pub fn offset(&self, dx: f32, dz: f32) -> WorldPosition {
        WorldPosition::new(self.x + dx, self.y, self.z + dz)
    }
}
