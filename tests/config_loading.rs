// tests/config_loading.rs

mod common;

use devtasks::config::model::DEFAULT_STYLE_FILES;
use devtasks::config::{load_and_validate, load_or_default, BuildSection, StyleSection};
use devtasks::errors::DevtasksError;

use common::write_config;

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = load_or_default(dir.path().join("Devtasks.toml")).unwrap();

    assert_eq!(cfg.build(), &BuildSection::default());
    assert_eq!(cfg.build().dir, "build");
    assert_eq!(cfg.build().test_target, "test_mediasoupclient");
    assert_eq!(cfg.style().tool, "clang-format");
    assert_eq!(cfg.style().files, DEFAULT_STYLE_FILES.to_vec());
}

#[test]
fn empty_file_equals_defaults() {
    let file = write_config("");
    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.build(), &BuildSection::default());
    assert_eq!(cfg.style(), &StyleSection::default());
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let file = write_config(
        r#"
[build]
dir = "out/debug"

[style]
tool = "clang-format-18"
"#,
    );
    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.build().dir, "out/debug");
    assert_eq!(cfg.build().cmake, "cmake");
    assert_eq!(cfg.style().tool, "clang-format-18");
    assert_eq!(cfg.style().files.len(), 4);
}

#[test]
fn invalid_glob_returns_config_error() {
    let file = write_config(
        r#"
[style]
files = ["src/**/*.{cpp"]
"#,
    );

    match load_and_validate(file.path()) {
        Err(DevtasksError::ConfigError(msg)) => assert!(msg.contains("invalid glob")),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn build_dir_cannot_be_the_project_root() {
    let file = write_config(
        r#"
[build]
dir = "."
"#,
    );

    assert!(matches!(
        load_and_validate(file.path()),
        Err(DevtasksError::ConfigError(_))
    ));
}

#[test]
fn build_dir_cannot_escape_the_project_root() {
    for dir in ["../victim", "build/../../victim", "/home/me", "./."] {
        let file = write_config(&format!("[build]\ndir = {dir:?}\n"));

        match load_and_validate(file.path()) {
            Err(DevtasksError::ConfigError(msg)) => assert!(msg.contains("[build].dir"), "{dir}: {msg}"),
            other => panic!("{dir}: expected ConfigError, got {other:?}"),
        }
    }
}

#[test]
fn nested_relative_build_dir_is_accepted() {
    let file = write_config("[build]\ndir = \"./out/release\"\n");
    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.build().dir, "./out/release");
}

#[test]
fn unknown_keys_are_rejected() {
    let file = write_config(
        r#"
[build]
directory = "build"
"#,
    );

    assert!(matches!(
        load_and_validate(file.path()),
        Err(DevtasksError::TomlError(_))
    ));
}

#[test]
fn explicit_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_and_validate(dir.path().join("nope.toml")),
        Err(DevtasksError::IoError(_))
    ));
}
