#![allow(dead_code)]

use std::path::PathBuf;

use devtasks::cli::{CliArgs, Task};
use devtasks::config::TestEnv;

/// Builder for `TestEnv` to simplify test setup.
#[derive(Debug, Default)]
pub struct TestEnvBuilder {
    env: TestEnv,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rebuild(mut self, value: &str) -> Self {
        self.env.rebuild = Some(value.to_string());
        self
    }

    pub fn sources(mut self, path: &str) -> Self {
        self.env.libwebrtc_sources = Some(path.to_string());
        self
    }

    pub fn binary(mut self, path: &str) -> Self {
        self.env.libwebrtc_binary = Some(path.to_string());
        self
    }

    pub fn test_args(mut self, args: &str) -> Self {
        self.env.test_args = Some(args.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        self.env
    }
}

/// Builder for `CliArgs` without going through argv parsing.
#[derive(Debug)]
pub struct CliArgsBuilder {
    args: CliArgs,
}

impl CliArgsBuilder {
    pub fn new(task: Task) -> Self {
        Self {
            args: CliArgs {
                project_dir: PathBuf::from("."),
                config: None,
                log_level: None,
                dry_run: false,
                task,
            },
        }
    }

    pub fn project_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.args.project_dir = dir.into();
        self
    }

    pub fn config(mut self, path: impl Into<PathBuf>) -> Self {
        self.args.config = Some(path.into());
        self
    }

    pub fn dry_run(mut self) -> Self {
        self.args.dry_run = true;
        self
    }

    pub fn build(self) -> CliArgs {
        self.args
    }
}
