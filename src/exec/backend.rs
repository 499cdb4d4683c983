// src/exec/backend.rs

//! Pluggable command runner abstraction.
//!
//! Orchestration code talks to a `CommandRunner` instead of spawning
//! processes itself. Production uses [`ShellRunner`]; tests swap in a fake
//! that records commands and replays scripted outcomes.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::errors::Result;

use super::command::Command;
use super::output::{OutputSink, TracingSink};
use super::process::run_process;

/// Trait abstracting how one command is executed.
pub trait CommandRunner: Send + Sync {
    /// Run `command` to completion.
    ///
    /// Resolves `Ok(())` only on a clean exit; any other termination is a
    /// `DevtasksError::ProcessFailure`.
    fn run<'a>(
        &'a self,
        command: &'a Command,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}

/// Real runner: spawns the host shell and streams output into a sink.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    sink: Arc<dyn OutputSink>,
}

impl ShellRunner {
    /// Runner that logs child output through `tracing`.
    pub fn new() -> Self {
        Self::with_sink(Arc::new(TracingSink))
    }

    pub fn with_sink(sink: Arc<dyn OutputSink>) -> Self {
        Self { sink }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ShellRunner {
    fn run<'a>(
        &'a self,
        command: &'a Command,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        let sink = Arc::clone(&self.sink);
        Box::pin(async move { run_process(command, sink).await?.into_result() })
    }
}
