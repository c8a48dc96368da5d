// src/lib.rs

pub mod config;
pub mod generator;
pub mod grid;
pub mod render;
pub mod scene;
pub mod utils;

pub use config::{GeneratorConfig, PieceCategory, Prefab};
pub use generator::{generate, GenerationError, GenerationReport, Generator, Phase};
pub use scene::{ConnectorScene, Scene};
