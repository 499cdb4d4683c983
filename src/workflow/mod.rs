// src/workflow/mod.rs

//! The `test` task: optional clean + configure, build, then run the test
//! executable.
//!
//! - [`commands`] formats the CMake and test command strings.
//! - [`stage`] names the states a run moves through.
//!
//! The workflow decides what runs and in which order; how each command is
//! executed is up to the [`CommandRunner`] it is given.

pub mod commands;
pub mod stage;

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::{BuildSection, TestEnv};
use crate::errors::Result;
use crate::exec::{Command, CommandRunner};
use crate::fs::FileSystem;
use crate::types::HostOs;

pub use stage::WorkflowStage;

/// What a run would do, without doing it. Used for `--dry-run`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestPlan {
    /// Directory wiped before configuring, if rebuilding.
    pub clean_dir: Option<PathBuf>,
    pub configure: Option<Command>,
    pub build: Command,
    pub test: Command,
}

/// One invocation of the test workflow.
///
/// Inputs are fixed at construction; nothing here reads the process
/// environment.
pub struct TestWorkflow<'a> {
    env: TestEnv,
    build: BuildSection,
    os: HostOs,
    project_dir: PathBuf,
    fs: &'a dyn FileSystem,
    runner: &'a dyn CommandRunner,
    stage: WorkflowStage,
}

impl<'a> TestWorkflow<'a> {
    pub fn new(
        env: TestEnv,
        build: BuildSection,
        fs: &'a dyn FileSystem,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            env,
            build,
            os: HostOs::current(),
            project_dir: PathBuf::from("."),
            fs,
            runner,
            stage: WorkflowStage::Idle,
        }
    }

    /// Override the host identity used to locate the test executable.
    pub fn with_host_os(mut self, os: HostOs) -> Self {
        self.os = os;
        self
    }

    /// Run everything relative to `dir` instead of the current directory.
    pub fn with_project_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.project_dir = dir.into();
        self
    }

    pub fn stage(&self) -> WorkflowStage {
        self.stage
    }

    /// Build the commands a run would execute for the current inputs.
    pub fn plan(&self) -> TestPlan {
        let rebuild = self.env.rebuild_requested();
        TestPlan {
            clean_dir: rebuild.then(|| self.build_dir()),
            configure: rebuild.then(|| self.command(commands::configure_command(&self.build, &self.env))),
            build: self.command(commands::build_command(&self.build)),
            test: self.command(commands::test_command(self.os, &self.build, &self.env)),
        }
    }

    /// Execute the workflow, stopping at the first failing command.
    ///
    /// The failing command's error is returned unchanged.
    pub async fn run(&mut self) -> Result<()> {
        match self.run_steps().await {
            Ok(()) => {
                self.enter(WorkflowStage::Done);
                Ok(())
            }
            Err(err) => {
                info!(stage = %self.stage, error = %err, "test workflow failed");
                self.enter(WorkflowStage::Failed);
                Err(err)
            }
        }
    }

    async fn run_steps(&mut self) -> Result<()> {
        if self.env.rebuild_requested() {
            self.enter(WorkflowStage::Configure);
            self.clean_build_dir();
            let configure = self.command(commands::configure_command(&self.build, &self.env));
            self.runner.run(&configure).await?;
        } else {
            debug!("rebuild not requested; reusing existing build directory");
        }

        self.enter(WorkflowStage::Build);
        let build = self.command(commands::build_command(&self.build));
        self.runner.run(&build).await?;

        self.enter(WorkflowStage::LocateBinary);
        let test = self.command(commands::test_command(self.os, &self.build, &self.env));
        debug!(os = ?self.os, cmd = %test, "resolved test command");

        self.enter(WorkflowStage::Run);
        self.runner.run(&test).await?;

        Ok(())
    }

    /// Best effort: a missing directory or a failed delete is only logged.
    fn clean_build_dir(&self) {
        let dir = self.build_dir();
        if !self.build.dir_is_inside_project() {
            warn!(dir = %dir.display(), "build directory is outside the project; not removing it");
            return;
        }
        match self.fs.remove_dir_all(&dir) {
            Ok(()) => debug!(dir = %dir.display(), "removed build directory"),
            Err(e) => debug!(dir = %dir.display(), error = %e, "could not remove build directory; continuing"),
        }
    }

    fn build_dir(&self) -> PathBuf {
        join_project(&self.project_dir, &self.build.dir)
    }

    fn command(&self, line: String) -> Command {
        if self.project_dir == Path::new(".") {
            Command::new(line)
        } else {
            Command::new(line).in_dir(&self.project_dir)
        }
    }

    fn enter(&mut self, stage: WorkflowStage) {
        debug!(from = %self.stage, to = %stage, "test workflow stage");
        self.stage = stage;
    }
}

fn join_project(project_dir: &Path, rel: &str) -> PathBuf {
    if project_dir == Path::new(".") {
        PathBuf::from(rel)
    } else {
        project_dir.join(rel)
    }
}
