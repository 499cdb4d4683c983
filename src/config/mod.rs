// src/config/mod.rs

//! Configuration for devtasks.
//!
//! Responsibilities:
//! - Define the optional TOML project file model (`model.rs`).
//! - Load it from disk (`loader.rs`).
//! - Validate basic invariants like non-empty paths and valid globs (`validate.rs`).
//! - Snapshot the workflow's environment variables (`env.rs`).

pub mod env;
pub mod loader;
pub mod model;
pub mod validate;

pub use env::TestEnv;
pub use loader::{default_config_path, load_and_validate, load_from_path, load_or_default};
pub use model::{BuildSection, ProjectConfig, RawProjectConfig, StyleSection};
