// src/exec/mod.rs

//! Process execution layer.
//!
//! Runs exactly one shell command at a time using `tokio::process::Command`,
//! streams its output as tagged lines and turns the termination status into
//! a [`ProcessOutcome`].
//!
//! - [`command`] defines the immutable [`Command`] value.
//! - [`process`] spawns the shell and owns the single output writer.
//! - [`output`] splits raw chunks into tagged lines and defines sinks.
//! - [`outcome`] classifies exit code / signal pairs.
//! - [`backend`] provides the `CommandRunner` trait and the production
//!   `ShellRunner`, which tests can replace with a fake implementation.

pub mod backend;
pub mod command;
pub mod outcome;
pub mod output;
pub mod process;

pub use backend::{CommandRunner, ShellRunner};
pub use command::{shell_quote, Command};
pub use outcome::ProcessOutcome;
pub use output::{OutputLine, OutputSink, RecordingSink, TracingSink};
