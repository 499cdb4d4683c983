// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod style;
pub mod types;
pub mod workflow;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::{CliArgs, Task};
use crate::config::{default_config_path, load_and_validate, load_or_default, ProjectConfig, TestEnv};
use crate::exec::{CommandRunner, ShellRunner};
use crate::fs::{FileSystem, RealFileSystem};
use crate::types::StyleMode;
use crate::workflow::{TestPlan, TestWorkflow};

/// High-level entry point used by `main.rs`.
///
/// This is the only place that touches ambient process state: it snapshots
/// the environment and wires the real filesystem and shell runner.
pub async fn run(args: CliArgs) -> Result<()> {
    let env = TestEnv::from_env();
    let runner = ShellRunner::new();
    run_with(args, env, &RealFileSystem, &runner).await
}

/// Same as [`run`] with every collaborator supplied by the caller.
pub async fn run_with(
    args: CliArgs,
    env: TestEnv,
    fs: &dyn FileSystem,
    runner: &dyn CommandRunner,
) -> Result<()> {
    let cfg = load_project_config(&args)?;
    let project_dir = args.project_dir.as_path();

    info!(task = ?args.task, project_dir = %project_dir.display(), "starting task");

    match args.task {
        Task::Lint | Task::Format => {
            let mode = if args.task == Task::Lint {
                StyleMode::Check
            } else {
                StyleMode::Rewrite
            };

            if args.dry_run {
                let command = style::plan_style(cfg.style(), mode, fs, project_dir)?;
                print_style_dry_run(mode, command.as_ref());
                return Ok(());
            }

            style::run_style(cfg.style(), mode, fs, runner, project_dir).await?;
        }
        Task::Test => {
            let mut workflow = TestWorkflow::new(env, cfg.build().clone(), fs, runner)
                .with_project_dir(project_dir);

            if args.dry_run {
                print_test_dry_run(&workflow.plan());
                return Ok(());
            }

            workflow.run().await?;
        }
    }

    info!(task = ?args.task, "task finished");
    Ok(())
}

/// An explicit `--config` must exist; the default location is optional.
fn load_project_config(args: &CliArgs) -> Result<ProjectConfig> {
    let cfg = match &args.config {
        Some(path) => load_and_validate(path)?,
        None => load_or_default(default_config_path(&args.project_dir))?,
    };
    debug!(?cfg, "project configuration");
    Ok(cfg)
}

fn print_style_dry_run(mode: StyleMode, command: Option<&exec::Command>) {
    println!("devtasks dry-run ({mode:?})");
    match command {
        Some(cmd) => println!("  run: {cmd}"),
        None => println!("  no files matched; nothing to run"),
    }
}

fn print_test_dry_run(plan: &TestPlan) {
    println!("devtasks dry-run (test)");
    if let Some(dir) = &plan.clean_dir {
        println!("  remove: {}", dir.display());
    }
    if let Some(configure) = &plan.configure {
        println!("  run: {configure}");
    }
    println!("  run: {}", plan.build);
    println!("  run: {}", plan.test);
}
