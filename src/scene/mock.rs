// src/scene/mock.rs
//! Scripted scenes for tests.

use std::collections::HashSet;

use super::{cell_to_world, Scene};
use crate::config::Prefab;
use crate::generator::Rotation;
use crate::grid::GridPos;
use crate::utils::WorldPosition;

/// Records every call and answers occupancy queries from a fixed rule.
#[derive(Debug, Clone)]
pub struct MockScene {
    spacing: f32,
    occupied: Occupancy,
    pub spawned: Vec<(Prefab, WorldPosition)>,
    pub rotations: Vec<(usize, Rotation)>,
}

#[derive(Debug, Clone)]
enum Occupancy {
    Everywhere,
    Nowhere,
    Cells(HashSet<GridPos>),
}

impl MockScene {
    /// Every query reports a piece nearby.
    pub fn always_occupied(spacing: f32) -> Self {
        Self::with(spacing, Occupancy::Everywhere)
    }

    pub fn never_occupied(spacing: f32) -> Self {
        Self::with(spacing, Occupancy::Nowhere)
    }

    /// Only queries landing on the centre of one of `cells` report a piece.
    pub fn occupied_cells(spacing: f32, cells: impl IntoIterator<Item = GridPos>) -> Self {
        Self::with(spacing, Occupancy::Cells(cells.into_iter().collect()))
    }

    fn with(spacing: f32, occupied: Occupancy) -> Self {
        Self {
            spacing,
            occupied,
            spawned: Vec::new(),
            rotations: Vec::new(),
        }
    }

    /// Net rotation applied to the piece with the given handle.
    pub fn total_rotation(&self, handle: usize) -> Rotation {
        self.rotations
            .iter()
            .filter(|(h, _)| *h == handle)
            .fold(Rotation::Rot0, |acc, (_, r)| acc + *r)
    }
}

impl Scene for MockScene {
    type Handle = usize;

    fn instantiate(&mut self, prefab: &Prefab, at: WorldPosition) -> usize {
        self.spawned.push((prefab.clone(), at));
        self.spawned.len() - 1
    }

    fn is_occupied_near(&self, at: WorldPosition, radius: f32) -> bool {
        match &self.occupied {
            Occupancy::Everywhere => true,
            Occupancy::Nowhere => false,
            Occupancy::Cells(cells) => cells
                .iter()
                .any(|cell| cell_to_world(*cell, self.spacing).distance_to(&at) <= radius),
        }
    }

    fn rotate(&mut self, piece: &usize, rotation: Rotation) {
        self.rotations.push((*piece, rotation));
    }
}

/// Wraps a scene and counts occupancy queries; `is_occupied_near` takes `&self`, so the
/// count lives in a `Cell`.
#[derive(Debug)]
pub struct CountingScene<S> {
    pub inner: S,
    pub query_count: std::cell::Cell<usize>,
}

impl<S> CountingScene<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            query_count: std::cell::Cell::new(0),
        }
    }
}

impl<S: Scene> Scene for CountingScene<S> {
    type Handle = S::Handle;

    fn instantiate(&mut self, prefab: &Prefab, at: WorldPosition) -> S::Handle {
        self.inner.instantiate(prefab, at)
    }

    fn is_occupied_near(&self, at: WorldPosition, radius: f32) -> bool {
        self.query_count.set(self.query_count.get() + 1);
        self.inner.is_occupied_near(at, radius)
    }

    fn rotate(&mut self, piece: &S::Handle, rotation: Rotation) {
        self.inner.rotate(piece, rotation)
    }
}
