use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use devtasks::errors::Result;
use devtasks::exec::{Command, CommandRunner, ProcessOutcome};

/// A fake runner that:
/// - records every command it was asked to run, in order
/// - replays scripted outcomes, falling back to success once the script is
///   exhausted.
#[derive(Debug, Clone, Default)]
pub struct FakeRunner {
    executed: Arc<Mutex<Vec<Command>>>,
    script: Arc<Mutex<VecDeque<ProcessOutcome>>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue outcomes for the next commands, one per command.
    pub fn with_outcomes(self, outcomes: impl IntoIterator<Item = ProcessOutcome>) -> Self {
        self.script.lock().unwrap().extend(outcomes);
        self
    }

    /// Outcome for the `n`th command (0-based); earlier commands succeed.
    pub fn failing_at(self, n: usize, outcome: ProcessOutcome) -> Self {
        let mut outcomes = vec![ProcessOutcome::Success; n];
        outcomes.push(outcome);
        self.with_outcomes(outcomes)
    }

    pub fn executed(&self) -> Vec<Command> {
        self.executed.lock().unwrap().clone()
    }

    /// Just the command strings, in execution order.
    pub fn executed_lines(&self) -> Vec<String> {
        self.executed()
            .iter()
            .map(|c| c.line().to_string())
            .collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run<'a>(
        &'a self,
        command: &'a Command,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        let executed = Arc::clone(&self.executed);
        let script = Arc::clone(&self.script);

        Box::pin(async move {
            executed.lock().unwrap().push(command.clone());

            let outcome = script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(ProcessOutcome::Success);

            outcome.into_result()
        })
    }
}
