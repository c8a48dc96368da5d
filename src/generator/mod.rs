// src/generator/mod.rs
pub mod driver;
pub mod report;
pub mod rotation;
pub mod scanner;
pub mod selector;

pub use driver::{generate, Generator, Phase};
pub use report::{GenerationIssue, GenerationReport, Placement};
pub use rotation::{compute_rotation, rotation_rule, Rotation, RotationError, RotationRule};
pub use scanner::{scan_neighbors, SlotCheck};
pub use selector::find_next_eligible;

use thiserror::Error;

use crate::config::ConfigError;
use crate::grid::GridError;

/// Conditions that stop a run. Unrecognized categories are not among them;
/// they are collected in the [`GenerationReport`].
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("the start cell can only be chosen before generation begins")]
    AlreadyStarted,
}
