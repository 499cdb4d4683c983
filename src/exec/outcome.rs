// src/exec/outcome.rs

//! Classification of a terminated child process.

use std::process::ExitStatus;

use crate::errors::{DevtasksError, Result};

/// How a child process ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    Success,
    Failure {
        code: Option<i32>,
        signal: Option<String>,
    },
}

impl ProcessOutcome {
    /// Classify a raw `(code, signal)` pair.
    ///
    /// Only `code == Some(0)` with no signal is a success. A present signal
    /// always wins: the reported code is dropped so the failure carries the
    /// signal alone.
    pub fn classify(code: Option<i32>, signal: Option<String>) -> Self {
        match (code, signal) {
            (_, Some(signal)) => ProcessOutcome::Failure {
                code: None,
                signal: Some(signal),
            },
            (Some(0), None) => ProcessOutcome::Success,
            (code, None) => ProcessOutcome::Failure { code, signal: None },
        }
    }

    pub fn from_status(status: ExitStatus) -> Self {
        Self::classify(status.code(), signal_name(&status))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProcessOutcome::Success)
    }

    /// Convert into the runner's result type.
    pub fn into_result(self) -> Result<()> {
        match self {
            ProcessOutcome::Success => Ok(()),
            ProcessOutcome::Failure { code, signal } => {
                Err(DevtasksError::process_failure(code, signal))
            }
        }
    }
}

#[cfg(unix)]
fn signal_name(status: &ExitStatus) -> Option<String> {
    use nix::sys::signal::Signal;
    use std::os::unix::process::ExitStatusExt;

    let raw = status.signal()?;
    Some(match Signal::try_from(raw) {
        Ok(sig) => sig.as_str().to_string(),
        Err(_) => format!("signal {raw}"),
    })
}

#[cfg(not(unix))]
fn signal_name(_status: &ExitStatus) -> Option<String> {
    None
}
