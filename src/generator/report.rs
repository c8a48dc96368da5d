// src/generator/report.rs

use std::collections::HashMap;
use union_find::{QuickUnionUf, UnionBySize, UnionFind};

use super::rotation::{Rotation, RotationError};
use crate::config::PieceCategory;
use crate::grid::{Direction, GridPos};

/// One piece placed during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Zero for the seed piece, then one more per placement.
    pub order: usize,
    pub pos: GridPos,
    pub category: PieceCategory,
    pub visual: String,
    pub rotation: Rotation,
    /// `pos - previous placement`; `(0, 0)` for the seed.
    pub approach: (i32, i32),
}

/// A recoverable problem hit while placing a piece.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationIssue {
    pub order: usize,
    pub pos: GridPos,
    pub error: RotationError,
}

#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub columns: usize,
    pub rows: usize,
    pub placements: Vec<Placement>,
    pub issues: Vec<GenerationIssue>,
}

impl GenerationReport {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            ..Self::default()
        }
    }

    pub fn filled_count(&self) -> usize {
        self.placements.len()
    }

    pub fn placement_at(&self, pos: GridPos) -> Option<&Placement> {
        self.placements.iter().find(|p| p.pos == pos)
    }

    /// True when the filled cells form one orthogonally connected region.
    pub fn is_connected(&self) -> bool {
        if self.placements.is_empty() {
            return true;
        }
        let index: HashMap<GridPos, usize> = self
            .placements
            .iter()
            .enumerate()
            .map(|(i, p)| (p.pos, i))
            .collect();

        let mut sets = QuickUnionUf::<UnionBySize>::new(self.placements.len());
        for (i, placement) in self.placements.iter().enumerate() {
            // East and North are enough; West/South links are made from the other side.
            for dir in [Direction::East, Direction::North] {
                let (dc, dr) = dir.delta();
                let (Some(col), Some(row)) = (
                    placement.pos.col.checked_add_signed(dc as isize),
                    placement.pos.row.checked_add_signed(dr as isize),
                ) else {
                    continue;
                };
                if let Some(&j) = index.get(&GridPos::new(col, row)) {
                    sets.union(i, j);
                }
            }
        }

        let root = sets.find(0);
        (1..self.placements.len()).all(|i| sets.find(i) == root)
    }
}
