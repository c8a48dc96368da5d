// src/config/prefab.rs

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Connection shape of a placeable piece.
///
/// Tags in a catalog are matched against the four known shapes; anything else
/// becomes `Other` and is carried through generation without a rotation rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PieceCategory {
    /// Straight hall, open on two opposite sides.
    Corridor,
    /// L-shaped turn.
    Corner,
    TJunction,
    /// Dead end.
    EndCap,
    Other(String),
}

impl PieceCategory {
    pub const BUILTIN: [PieceCategory; 4] = [
        PieceCategory::Corridor,
        PieceCategory::Corner,
        PieceCategory::TJunction,
        PieceCategory::EndCap,
    ];

    /// The catalog tag this category serializes to.
    pub fn tag(&self) -> &str {
        match self {
            PieceCategory::Corridor => "Hall",
            PieceCategory::Corner => "LShape",
            PieceCategory::TJunction => "TShape",
            PieceCategory::EndCap => "End",
            PieceCategory::Other(tag) => tag,
        }
    }
}

impl FromStr for PieceCategory {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Hall" | "Corridor" => PieceCategory::Corridor,
            "LShape" | "Corner" => PieceCategory::Corner,
            "TShape" | "TJunction" => PieceCategory::TJunction,
            "End" | "EndCap" => PieceCategory::EndCap,
            other => PieceCategory::Other(other.to_owned()),
        })
    }
}

impl From<String> for PieceCategory {
    fn from(tag: String) -> Self {
        match tag.parse() {
            Ok(category) => category,
            Err(never) => match never {},
        }
    }
}

impl From<PieceCategory> for String {
    fn from(category: PieceCategory) -> Self {
        category.tag().to_owned()
    }
}

impl fmt::Display for PieceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One catalog entry: a category plus the visual asset the scene should use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prefab {
    pub category: PieceCategory,
    pub visual: String,
}

impl Prefab {
    pub fn new(category: PieceCategory, visual: impl Into<String>) -> Self {
        Self {
            category,
            visual: visual.into(),
        }
    }
}
