// src/generator/rotation.rs
//! Orientation of a freshly placed piece, derived from its category and the
//! direction the walk arrived from.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Add;
use thiserror::Error;

use crate::config::PieceCategory;
use crate::grid::Direction;

/// Quarter-turn rotation about the vertical axis, clockwise seen from above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    Rot0,
    Rot90,
    Rot180,
    Rot270,
}

impl Rotation {
    pub fn degrees(self) -> u16 {
        self.quarter_turns() as u16 * 90
    }

    fn quarter_turns(self) -> u8 {
        match self {
            Rotation::Rot0 => 0,
            Rotation::Rot90 => 1,
            Rotation::Rot180 => 2,
            Rotation::Rot270 => 3,
        }
    }

    fn from_quarter_turns(turns: u8) -> Rotation {
        match turns % 4 {
            0 => Rotation::Rot0,
            1 => Rotation::Rot90,
            2 => Rotation::Rot180,
            _ => Rotation::Rot270,
        }
    }

    /// Where `dir` points after this rotation.
    pub fn apply(self, dir: Direction) -> Direction {
        (0..self.quarter_turns()).fold(dir, |d, _| d.turned_clockwise())
    }
}

impl Add for Rotation {
    type Output = Rotation;

    fn add(self, rhs: Rotation) -> Rotation {
        Rotation::from_quarter_turns(self.quarter_turns() + rhs.quarter_turns())
    }
}

/// What a category does when approached from one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationRule {
    /// Stay as placed.
    Keep,
    Fixed(Rotation),
    /// Coin flip between two angles.
    Either(Rotation, Rotation),
}

impl RotationRule {
    pub fn resolve<R: Rng>(self, rng: &mut R) -> Rotation {
        match self {
            RotationRule::Keep => Rotation::Rot0,
            RotationRule::Fixed(rotation) => rotation,
            RotationRule::Either(first, second) => {
                if rng.random_range(0..2) == 0 {
                    first
                } else {
                    second
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotationError {
    #[error("no rotation rule for piece category '{category}'")]
    UnrecognizedCategory { category: String },
}

/// Rule table keyed by (category, approach direction). `approach` is the
/// direction of travel from the previous cell into the new one.
pub fn rotation_rule(
    category: &PieceCategory,
    approach: Direction,
) -> Result<RotationRule, RotationError> {
    use Direction::*;
    use Rotation::*;
    use RotationRule::*;

    let rule = match (category, approach) {
        // Only turns when arriving along the column axis.
        (PieceCategory::Corridor, East | West) => Fixed(Rot90),
        (PieceCategory::Corridor, North | South) => Keep,

        (PieceCategory::Corner, East) => Either(Rot180, Rot270),
        (PieceCategory::Corner, West) => Either(Rot0, Rot90),
        (PieceCategory::Corner, North) => Either(Rot0, Rot270),
        (PieceCategory::Corner, South) => Either(Rot90, Rot180),

        (PieceCategory::TJunction, East) => Either(Rot270, Rot180),
        (PieceCategory::TJunction, West) => Either(Rot90, Rot270),
        (PieceCategory::TJunction, North) => Either(Rot90, Rot180),
        (PieceCategory::TJunction, South) => Either(Rot180, Rot270),

        (PieceCategory::EndCap, East) => Fixed(Rot90),
        (PieceCategory::EndCap, West) => Keep,
        (PieceCategory::EndCap, North) => Fixed(Rot270),
        (PieceCategory::EndCap, South) => Fixed(Rot180),

        (PieceCategory::Other(tag), _) => {
            return Err(RotationError::UnrecognizedCategory {
                category: tag.clone(),
            })
        }
    };
    Ok(rule)
}

/// Directions whose rules fire for `delta`, in the order they are drawn:
/// +col, -col, +row, -row. A unit step fires exactly one.
pub fn approach_directions(delta: (i32, i32)) -> Vec<Direction> {
    let (dc, dr) = delta;
    let mut dirs = Vec::with_capacity(2);
    if dc > 0 {
        dirs.push(Direction::East);
    }
    if dc < 0 {
        dirs.push(Direction::West);
    }
    if dr > 0 {
        dirs.push(Direction::North);
    }
    if dr < 0 {
        dirs.push(Direction::South);
    }
    dirs
}

/// Rotation for a piece of `category` reached by `delta = current - previous`.
///
/// A zero delta yields no rotation. When both axes changed (the previous cell
/// was not a neighbour) each axis rule fires and the angles add up.
pub fn compute_rotation<R: Rng>(
    category: &PieceCategory,
    delta: (i32, i32),
    rng: &mut R,
) -> Result<Rotation, RotationError> {
    if let PieceCategory::Other(tag) = category {
        return Err(RotationError::UnrecognizedCategory {
            category: tag.clone(),
        });
    }

    let mut total = Rotation::Rot0;
    for dir in approach_directions(delta) {
        total = total + rotation_rule(category, dir)?.resolve(rng);
    }
    Ok(total)
}
