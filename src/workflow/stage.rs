// src/workflow/stage.rs

use std::fmt;

/// Where a test workflow run currently is.
///
/// Linear: `Idle → Configure → Build → LocateBinary → Run → Done`, with
/// `Failed` reachable from each of the three command-running stages.
/// `Configure` is skipped unless a rebuild was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    Idle,
    Configure,
    Build,
    LocateBinary,
    Run,
    Done,
    Failed,
}

impl WorkflowStage {
    pub fn is_terminal(self) -> bool {
        matches!(self, WorkflowStage::Done | WorkflowStage::Failed)
    }
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WorkflowStage::Idle => "idle",
            WorkflowStage::Configure => "configure",
            WorkflowStage::Build => "build",
            WorkflowStage::LocateBinary => "locate-binary",
            WorkflowStage::Run => "run",
            WorkflowStage::Done => "done",
            WorkflowStage::Failed => "failed",
        };
        f.write_str(s)
    }
}
