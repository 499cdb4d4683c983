// src/exec/process.rs

//! Single command process runner.

use std::process::Stdio;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::errors::{DevtasksError, Result};
use crate::types::OutputStream;

use super::command::Command;
use super::outcome::ProcessOutcome;
use super::output::{pump_stream, OutputLine, OutputSink};

/// Run one command through the host shell and classify how it ended.
///
/// stdout and stderr are read by two independent tasks feeding a single
/// channel; this function is the only writer into `sink`. All output is
/// drained before the outcome is returned. There is no timeout.
pub async fn run_process(command: &Command, sink: Arc<dyn OutputSink>) -> Result<ProcessOutcome> {
    info!(cmd = %command, "running command");

    let mut cmd = command.to_shell();
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|source| DevtasksError::Spawn {
        command: command.line().to_string(),
        source,
    })?;

    let (tx, mut rx) = mpsc::channel::<OutputLine>(256);

    let mut readers = Vec::with_capacity(2);
    if let Some(stdout) = child.stdout.take() {
        readers.push(tokio::spawn(pump_stream(stdout, OutputStream::Stdout, tx.clone())));
    }
    if let Some(stderr) = child.stderr.take() {
        readers.push(tokio::spawn(pump_stream(stderr, OutputStream::Stderr, tx.clone())));
    }
    // Only the reader tasks hold senders now; the channel closes when both hit EOF.
    drop(tx);

    while let Some(line) = rx.recv().await {
        sink.emit(&line);
    }

    for reader in readers {
        if let Err(e) = reader.await {
            debug!(cmd = %command, error = %e, "output reader task ended abnormally");
        }
    }

    let status = child.wait().await?;
    let outcome = ProcessOutcome::from_status(status);

    match &outcome {
        ProcessOutcome::Success => debug!(cmd = %command, "command succeeded"),
        ProcessOutcome::Failure { code, signal } => info!(
            cmd = %command,
            exit_code = ?code,
            signal = ?signal,
            "command failed"
        ),
    }

    Ok(outcome)
}
