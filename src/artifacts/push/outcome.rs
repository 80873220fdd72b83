use crate::artifacts::log::log_entry::LogResult;
use crate::artifacts::messages::message::Message;
use crate::artifacts::push::commit_request::CommitRequest;
use crate::artifacts::push::git_step::GitStep;
use derive_new::new;

/// A git step that exited non-zero or could not be started at all.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct StepFailure {
    step: GitStep,
    output: String,
}

impl StepFailure {
    pub fn step(&self) -> GitStep {
        self.step
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}

/// Terminal state of a run. Every variant is logged exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Pushed(CommitRequest),
    GitUnavailable,
    StepFailed(StepFailure),
    Interrupted,
    Aborted(String),
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Pushed(_) => 0,
            _ => 1,
        }
    }

    pub fn log_result(&self) -> LogResult {
        match self {
            RunOutcome::Pushed(_) => LogResult::Ok,
            RunOutcome::GitUnavailable => LogResult::Fail(Message::GitNotInstalled.text().into()),
            RunOutcome::StepFailed(failure) => LogResult::Fail(failure.output().to_string()),
            RunOutcome::Interrupted => LogResult::Fail(Message::Interrupted.text().into()),
            RunOutcome::Aborted(reason) => LogResult::Fail(reason.clone()),
        }
    }
}
