// src/render/mod.rs
pub mod ascii;
#[cfg(feature = "gui")]
pub mod viewer;

pub use ascii::render_layout;
