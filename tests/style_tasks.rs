// tests/style_tasks.rs

mod common;

use std::path::{Path, PathBuf};

use devtasks::config::StyleSection;
use devtasks::errors::DevtasksError;
use devtasks::exec::ProcessOutcome;
use devtasks::fs::mock::MockFileSystem;
use devtasks::style::{plan_style, run_style, style_command, StyleFileSet};
use devtasks::types::StyleMode;
use devtasks_test_utils::{init_tracing, FakeRunner};

use common::TestResult;

fn project_tree() -> MockFileSystem {
    let fs = MockFileSystem::new();
    fs.add_file("./src/Device.cpp");
    fs.add_file("./src/sdp/Utils.cpp");
    fs.add_file("./include/Device.hpp");
    fs.add_file("./include/sdp/Utils.hpp");
    fs.add_file("./test/src/Device.test.cpp");
    fs.add_file("./test/include/helpers.hpp");
    // Not part of any group.
    fs.add_file("./deps/libsdptransform/src/grammar.cpp");
    fs.add_file("./src/notes.txt");
    fs.add_file("./include/legacy.h");
    fs.add_file("./test/data/parameters.hpp");
    fs
}

#[test]
fn collects_only_the_four_source_groups_sorted() -> TestResult {
    let fs = project_tree();
    let set = StyleFileSet::new(&StyleSection::default().files)?;

    let files = set.collect(&fs, Path::new("."))?;

    let expected: Vec<PathBuf> = [
        "include/Device.hpp",
        "include/sdp/Utils.hpp",
        "src/Device.cpp",
        "src/sdp/Utils.cpp",
        "test/include/helpers.hpp",
        "test/src/Device.test.cpp",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();
    assert_eq!(files, expected);
    Ok(())
}

#[test]
fn check_and_rewrite_commands_differ_only_in_mode_flags() {
    let files = vec![PathBuf::from("src/a.cpp"), PathBuf::from("include/b c.hpp")];

    assert_eq!(
        style_command("clang-format", StyleMode::Check, &files),
        "clang-format --style=file --dry-run --Werror src/a.cpp 'include/b c.hpp'"
    );
    assert_eq!(
        style_command("clang-format", StyleMode::Rewrite, &files),
        "clang-format --style=file -i src/a.cpp 'include/b c.hpp'"
    );
}

#[tokio::test]
async fn lint_runs_the_tool_once_over_all_files() -> TestResult {
    init_tracing();
    let fs = project_tree();
    let runner = FakeRunner::new();

    run_style(&StyleSection::default(), StyleMode::Check, &fs, &runner, Path::new(".")).await?;

    let lines = runner.executed_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("clang-format --style=file --dry-run --Werror "));
    assert!(lines[0].contains("src/sdp/Utils.cpp"));
    assert!(!lines[0].contains("grammar.cpp"));
    Ok(())
}

#[tokio::test]
async fn lint_failure_is_propagated_unchanged() {
    init_tracing();
    let fs = project_tree();
    let runner = FakeRunner::new().failing_at(
        0,
        ProcessOutcome::Failure {
            code: Some(1),
            signal: None,
        },
    );

    let result =
        run_style(&StyleSection::default(), StyleMode::Check, &fs, &runner, Path::new(".")).await;

    assert!(matches!(
        result,
        Err(DevtasksError::ProcessFailure { code: Some(1), signal: None })
    ));
}

#[tokio::test]
async fn no_matching_files_skips_the_tool() -> TestResult {
    init_tracing();
    let fs = MockFileSystem::new();
    fs.add_file("./README.md");
    let runner = FakeRunner::new();

    run_style(&StyleSection::default(), StyleMode::Rewrite, &fs, &runner, Path::new(".")).await?;

    assert!(runner.executed().is_empty());
    Ok(())
}

#[test]
fn plan_runs_inside_a_non_default_project_dir() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file("/work/lib/src/Device.cpp");

    let command = plan_style(
        &StyleSection::default(),
        StyleMode::Rewrite,
        &fs,
        Path::new("/work/lib"),
    )?
    .expect("one file matches");

    assert_eq!(command.line(), "clang-format --style=file -i src/Device.cpp");
    assert_eq!(command.working_dir(), Some(Path::new("/work/lib")));
    Ok(())
}

#[test]
fn custom_patterns_replace_the_defaults() -> TestResult {
    let fs = project_tree();
    let style = StyleSection {
        tool: "clang-format-18".to_string(),
        files: vec!["deps/**/*.cpp".to_string()],
    };

    let command = plan_style(&style, StyleMode::Check, &fs, Path::new("."))?
        .expect("deps file matches");

    assert_eq!(
        command.line(),
        "clang-format-18 --style=file --dry-run --Werror deps/libsdptransform/src/grammar.cpp"
    );
    Ok(())
}
