// tests/common/mod.rs
//
// Helpers shared by the integration tests. Each test binary uses a
// different subset.
#![allow(dead_code)]

use std::error::Error;
use std::io::Write;

use tempfile::NamedTempFile;

pub type TestResult = Result<(), Box<dyn Error>>;

/// Write `contents` to a fresh temporary TOML file.
pub fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}
