// src/exec/output.rs

//! Child output capture.
//!
//! Each child stream is read chunk by chunk. Every chunk is split on `\n` and
//! each non-empty fragment becomes one [`OutputLine`]. Fragments are *not*
//! stitched back together across chunk boundaries, so a line that arrives in
//! two reads is reported as two lines.

use std::fmt::Debug;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::types::OutputStream;

const READ_CHUNK_SIZE: usize = 8 * 1024;

/// One tagged fragment of child output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub stream: OutputStream,
    pub text: String,
}

impl OutputLine {
    pub fn new(stream: OutputStream, text: impl Into<String>) -> Self {
        Self {
            stream,
            text: text.into(),
        }
    }
}

/// Split one received chunk into its non-empty newline-delimited fragments.
///
/// Invalid UTF-8 is replaced lossily; a trailing `\r` is kept as-is.
pub fn split_chunk(chunk: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(chunk)
        .split('\n')
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Single writer for everything a child prints.
pub trait OutputSink: Send + Sync + Debug {
    fn emit(&self, line: &OutputLine);
}

/// Default sink: every line goes to the trace log with its stream tag.
#[derive(Debug, Clone, Default)]
pub struct TracingSink;

impl OutputSink for TracingSink {
    fn emit(&self, line: &OutputLine) {
        match line.stream {
            OutputStream::Stdout => info!(stream = "stdout", "[stdout] {}", line.text),
            OutputStream::Stderr => warn!(stream = "stderr", "[stderr] {}", line.text),
        }
    }
}

/// Sink that keeps every line in memory, in emission order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    lines: Arc<Mutex<Vec<OutputLine>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<OutputLine> {
        self.lines
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Lines from one stream only, in the order they were received.
    pub fn lines_from(&self, stream: OutputStream) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|l| l.stream == stream)
            .map(|l| l.text)
            .collect()
    }
}

impl OutputSink for RecordingSink {
    fn emit(&self, line: &OutputLine) {
        if let Ok(mut guard) = self.lines.lock() {
            guard.push(line.clone());
        }
    }
}

/// Read `reader` until EOF, forwarding tagged fragments into `tx`.
///
/// Read errors end the stream; they are logged, not propagated, because the
/// process outcome is decided by the exit status alone.
pub async fn pump_stream<R>(mut reader: R, stream: OutputStream, tx: mpsc::Sender<OutputLine>)
where
    R: AsyncRead + Unpin,
{
    let mut buf = vec![0u8; READ_CHUNK_SIZE];

    loop {
        let n = match reader.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) => {
                debug!(stream = %stream, error = %e, "error reading child output; stopping");
                break;
            }
        };

        for text in split_chunk(&buf[..n]) {
            if tx.send(OutputLine { stream, text }).await.is_err() {
                debug!(stream = %stream, "output writer gone; dropping remaining output");
                return;
            }
        }
    }
}
