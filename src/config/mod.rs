// src/config/mod.rs
//! Generation settings: grid size, world pitch, occupancy radius and the
//! prefab catalog. Settings load from JSON and are validated once before a
//! run starts.

pub mod prefab;

pub use prefab::{PieceCategory, Prefab};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Distance between neighbouring cell centres in world units.
pub const DEFAULT_SPACING: f32 = 3.0;
/// Radius of the sphere used to test a neighbouring slot.
pub const DEFAULT_CHECK_RADIUS: f32 = 0.25;
pub const DEFAULT_COLUMNS: usize = 10;
pub const DEFAULT_ROWS: usize = 10;
/// Upper bound on `columns * rows`; keeps cell indices within `i32` deltas.
pub const MAX_CELLS: usize = 1 << 24;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid needs at least one column")]
    ZeroColumns,
    #[error("grid needs at least one row")]
    ZeroRows,
    #[error("grid of {columns}x{rows} exceeds the limit of {max} cells", max = MAX_CELLS)]
    GridTooLarge { columns: usize, rows: usize },
    #[error("prefab catalog is empty")]
    EmptyCatalog,
    #[error("spacing must be a positive finite number, got {0}")]
    InvalidSpacing(f32),
    #[error("check radius must be positive and smaller than the spacing ({spacing}), got {radius}")]
    InvalidCheckRadius { radius: f32, spacing: f32 },
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub prefabs: Vec<Prefab>,
    pub columns: usize,
    pub rows: usize,
    #[serde(default = "default_spacing")]
    pub spacing: f32,
    #[serde(default = "default_check_radius")]
    pub check_radius: f32,
    /// Fixed seed for reproducible layouts. `None` draws from the thread RNG.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_spacing() -> f32 {
    DEFAULT_SPACING
}

fn default_check_radius() -> f32 {
    DEFAULT_CHECK_RADIUS
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            prefabs: PieceCategory::BUILTIN
                .iter()
                .map(|category| Prefab::new(category.clone(), category.tag()))
                .collect(),
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            spacing: DEFAULT_SPACING,
            check_radius: DEFAULT_CHECK_RADIUS,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Default catalog on a grid of the given size.
    pub fn with_size(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        match self.columns.checked_mul(self.rows) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => {
                return Err(ConfigError::GridTooLarge {
                    columns: self.columns,
                    rows: self.rows,
                })
            }
        }
        if self.prefabs.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(ConfigError::InvalidSpacing(self.spacing));
        }
        if !(self.check_radius > 0.0 && self.check_radius < self.spacing) {
            return Err(ConfigError::InvalidCheckRadius {
                radius: self.check_radius,
                spacing: self.spacing,
            });
        }
        Ok(())
    }
}
