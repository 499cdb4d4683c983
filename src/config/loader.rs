// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ProjectConfig, RawProjectConfig, DEFAULT_CONFIG_FILE};
use crate::errors::Result;

/// Load a project file from a given path and return the raw `RawProjectConfig`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] for the
/// semantic checks.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawProjectConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawProjectConfig = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a project file from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ProjectConfig> {
    let raw_config = load_from_path(&path)?;
    let config = ProjectConfig::try_from(raw_config)?;
    Ok(config)
}

/// Load the project file if it exists, otherwise fall back to built-in
/// defaults.
///
/// A file that exists but fails to parse or validate is still an error.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<ProjectConfig> {
    let path = path.as_ref();
    if path.is_file() {
        debug!(path = %path.display(), "loading project file");
        load_and_validate(path)
    } else {
        debug!(path = %path.display(), "no project file; using defaults");
        Ok(ProjectConfig::default())
    }
}

/// `Devtasks.toml` inside `project_dir`.
pub fn default_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(DEFAULT_CONFIG_FILE)
}
