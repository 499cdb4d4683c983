// src/errors.rs

//! Crate-wide error aliases and helpers.

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevtasksError {
    /// A command terminated with a non-clean exit code and/or a signal.
    #[error(
        "command exited with code {} and signal {}",
        Field(.code.as_ref()),
        Field(.signal.as_ref())
    )]
    ProcessFailure {
        code: Option<i32>,
        signal: Option<String>,
    },

    #[error("failed to spawn shell for command `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DevtasksError {
    pub fn process_failure(code: Option<i32>, signal: Option<String>) -> Self {
        DevtasksError::ProcessFailure { code, signal }
    }
}

/// Renders an optional diagnostic field, `none` when absent.
struct Field<T>(Option<T>);

impl<T: fmt::Display> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("none"),
        }
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, DevtasksError>;
