// src/config/validate.rs

use globset::Glob;

use crate::config::model::{ProjectConfig, RawProjectConfig};
use crate::errors::{DevtasksError, Result};

impl TryFrom<RawProjectConfig> for ProjectConfig {
    type Error = DevtasksError;

    fn try_from(raw: RawProjectConfig) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ProjectConfig::new_unchecked(raw.build, raw.style))
    }
}

fn validate_raw_config(cfg: &RawProjectConfig) -> Result<()> {
    validate_build_section(cfg)?;
    validate_style_section(cfg)?;
    Ok(())
}

fn validate_build_section(cfg: &RawProjectConfig) -> Result<()> {
    let build = &cfg.build;

    if build.dir.trim().is_empty() {
        return Err(DevtasksError::ConfigError(
            "[build].dir must not be empty".to_string(),
        ));
    }
    if !build.dir_is_inside_project() {
        return Err(DevtasksError::ConfigError(format!(
            "[build].dir must be a subdirectory of the project root, without `..` (got {:?})",
            build.dir
        )));
    }
    if build.test_target.trim().is_empty() {
        return Err(DevtasksError::ConfigError(
            "[build].test_target must not be empty".to_string(),
        ));
    }
    if build.cmake.trim().is_empty() {
        return Err(DevtasksError::ConfigError(
            "[build].cmake must not be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_style_section(cfg: &RawProjectConfig) -> Result<()> {
    let style = &cfg.style;

    if style.tool.trim().is_empty() {
        return Err(DevtasksError::ConfigError(
            "[style].tool must not be empty".to_string(),
        ));
    }

    for pattern in style.files.iter() {
        Glob::new(pattern).map_err(|e| {
            DevtasksError::ConfigError(format!("[style].files: invalid glob {pattern:?}: {e}"))
        })?;
    }

    Ok(())
}
