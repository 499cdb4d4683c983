// tests/output_lines.rs

use std::collections::VecDeque;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use proptest::prelude::*;
use tokio::io::{AsyncRead, ReadBuf};
use tokio::sync::mpsc;

use devtasks::exec::output::{pump_stream, split_chunk};
use devtasks::exec::{OutputLine, OutputSink, RecordingSink};
use devtasks::types::OutputStream;

/// Reader that hands out one pre-defined chunk per read.
struct ChunkedReader {
    chunks: VecDeque<Vec<u8>>,
}

impl ChunkedReader {
    fn new(chunks: &[&str]) -> Self {
        Self {
            chunks: chunks.iter().map(|c| c.as_bytes().to_vec()).collect(),
        }
    }
}

impl AsyncRead for ChunkedReader {
    fn poll_read(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        if let Some(chunk) = self.chunks.pop_front() {
            buf.put_slice(&chunk);
        }
        Poll::Ready(Ok(()))
    }
}

async fn pump(chunks: &[&str], stream: OutputStream) -> Vec<OutputLine> {
    let (tx, mut rx) = mpsc::channel(64);
    pump_stream(ChunkedReader::new(chunks), stream, tx).await;

    let mut lines = Vec::new();
    while let Some(line) = rx.recv().await {
        lines.push(line);
    }
    lines
}

#[test]
fn split_drops_empty_fragments() {
    assert_eq!(split_chunk(b"a\nb\n"), vec!["a", "b"]);
    assert!(split_chunk(b"\n\n").is_empty());
    assert!(split_chunk(b"").is_empty());
    assert_eq!(split_chunk(b"no newline"), vec!["no newline"]);
}

#[test]
fn split_is_lossy_on_invalid_utf8() {
    let lines = split_chunk(b"ok\n\xff\xfe\n");
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "ok");
}

#[tokio::test]
async fn line_spanning_two_chunks_is_reported_twice() {
    let lines = pump(&["partial", " rest\nnext\n"], OutputStream::Stdout).await;
    let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["partial", " rest", "next"]);
}

#[tokio::test]
async fn every_line_carries_its_stream_tag() {
    let lines = pump(&["oops\n", "bad\n"], OutputStream::Stderr).await;
    assert_eq!(
        lines,
        vec![
            OutputLine::new(OutputStream::Stderr, "oops"),
            OutputLine::new(OutputStream::Stderr, "bad"),
        ]
    );
}

#[test]
fn recording_sink_filters_by_stream() {
    let sink = RecordingSink::new();
    sink.emit(&OutputLine::new(OutputStream::Stdout, "one"));
    sink.emit(&OutputLine::new(OutputStream::Stderr, "two"));
    sink.emit(&OutputLine::new(OutputStream::Stdout, "three"));

    assert_eq!(sink.lines().len(), 3);
    assert_eq!(sink.lines_from(OutputStream::Stdout), vec!["one", "three"]);
    assert_eq!(sink.lines_from(OutputStream::Stderr), vec!["two"]);
}

proptest! {
    #[test]
    fn split_preserves_non_empty_fragments_in_order(
        fragments in proptest::collection::vec("[a-z ]{0,8}", 0..12),
    ) {
        let chunk = fragments.join("\n");
        let expected: Vec<String> = fragments.into_iter().filter(|f| !f.is_empty()).collect();
        prop_assert_eq!(split_chunk(chunk.as_bytes()), expected);
    }
}
