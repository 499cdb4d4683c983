// src/style/mod.rs

//! The `lint` and `format` tasks: hand the project's C++ sources to
//! clang-format, either checking or rewriting them.

pub mod files;

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::StyleSection;
use crate::errors::Result;
use crate::exec::{shell_quote, Command, CommandRunner};
use crate::fs::FileSystem;
use crate::types::StyleMode;

pub use files::StyleFileSet;

/// Build the style tool invocation for `files`.
///
/// Check mode uses `--dry-run --Werror` so any difference fails the command.
pub fn style_command(tool: &str, mode: StyleMode, files: &[PathBuf]) -> String {
    let mut line = String::from(tool);
    line.push_str(" --style=file");
    match mode {
        StyleMode::Check => line.push_str(" --dry-run --Werror"),
        StyleMode::Rewrite => line.push_str(" -i"),
    }
    for file in files {
        line.push(' ');
        line.push_str(&shell_quote(&file.to_string_lossy().replace('\\', "/")));
    }
    line
}

/// Resolve the files and the command for a style task, or `None` when no
/// file matches.
pub fn plan_style(
    style: &StyleSection,
    mode: StyleMode,
    fs: &dyn FileSystem,
    project_dir: &Path,
) -> Result<Option<Command>> {
    let set = StyleFileSet::new(&style.files)?;
    let files = set.collect(fs, project_dir)?;

    if files.is_empty() {
        return Ok(None);
    }

    let mut command = Command::new(style_command(&style.tool, mode, &files));
    if project_dir != Path::new(".") {
        command = command.in_dir(project_dir);
    }
    Ok(Some(command))
}

/// Run the style tool once over every matching file.
///
/// The tool's own success or failure is returned unchanged.
pub async fn run_style(
    style: &StyleSection,
    mode: StyleMode,
    fs: &dyn FileSystem,
    runner: &dyn CommandRunner,
    project_dir: &Path,
) -> Result<()> {
    let Some(command) = plan_style(style, mode, fs, project_dir)? else {
        warn!(patterns = ?style.files, "no files matched the style patterns; nothing to do");
        return Ok(());
    };

    info!(?mode, tool = %style.tool, "running style tool");
    runner.run(&command).await
}
