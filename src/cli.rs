// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `devtasks`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "devtasks",
    version,
    about = "Lint, format and test the native client library.",
    long_about = None
)]
pub struct CliArgs {
    /// Project root; commands run here and globs are relative to it.
    #[arg(long, value_name = "DIR", default_value = ".", global = true)]
    pub project_dir: PathBuf,

    /// Path to the project file (TOML).
    ///
    /// Default: `Devtasks.toml` in the project directory. A missing default
    /// file means built-in settings.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DEVTASKS_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    /// Print the commands that would run, but don't run them.
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub task: Task,
}

/// Task identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Task {
    /// Check sources against the style tool without modifying them.
    Lint,
    /// Rewrite sources in place with the style tool.
    Format,
    /// (Re)configure if requested, build, then run the test executable.
    ///
    /// Reads REBUILD, PATH_TO_LIBWEBRTC_SOURCES, PATH_TO_LIBWEBRTC_BINARY and
    /// TEST_ARGS from the environment.
    Test,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
