use crate::areas::session::Session;
use crate::artifacts::log::log_entry::LogEntry;
use crate::artifacts::messages::message::Message;
use crate::artifacts::push::commit_request::{CommitDraft, CommitRequest, DEFAULT_BRANCH};
use crate::artifacts::push::git_step::GitStep;
use crate::artifacts::push::outcome::{RunOutcome, StepFailure};
use derive_new::new;
use std::io::Write;

pub const DEFAULT_REMOTE: &str = "origin";

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct PushOptions {
    default_branch: String,
    remote: String,
}

impl PushOptions {
    pub fn default_branch(&self) -> &str {
        &self.default_branch
    }

    pub fn remote(&self) -> &str {
        &self.remote
    }
}

impl Default for PushOptions {
    fn default() -> Self {
        Self::new(DEFAULT_BRANCH.to_string(), DEFAULT_REMOTE.to_string())
    }
}

impl Session {
    /// Runs preflight, the prompts and the three git steps, then logs and reports
    /// the outcome. `interrupt` resolving at any point after preflight ends the
    /// run as interrupted; no further git command is started.
    pub async fn run(
        &mut self,
        interrupt: impl Future<Output = ()>,
    ) -> anyhow::Result<RunOutcome> {
        let mut draft = CommitDraft::default();

        let outcome = if !self.preflight().await {
            RunOutcome::GitUnavailable
        } else {
            tokio::select! {
                result = self.push_changes(&mut draft) => {
                    result.unwrap_or_else(|error| RunOutcome::Aborted(format!("{error:#}")))
                }
                _ = interrupt => RunOutcome::Interrupted,
            }
        };
        tracing::debug!(?outcome, "run finished");

        self.log_file().append(&LogEntry::now(
            draft.commit_message_or_placeholder(),
            draft.branch_name_or_placeholder(),
            outcome.log_result(),
        ))?;
        self.report(&outcome)?;

        Ok(outcome)
    }

    async fn push_changes(&mut self, draft: &mut CommitDraft) -> anyhow::Result<RunOutcome> {
        let commit_message = self.prompt_commit_message().await?;
        draft.commit_message = Some(commit_message.clone());

        let branch_name = self.prompt_branch_name().await?;
        draft.branch_name = Some(branch_name.clone());

        let request = CommitRequest::new(commit_message, branch_name);
        writeln!(self.writer(), "{}", Message::TryingToPush)?;

        for step in GitStep::ALL {
            if let Err(failure) = self.run_step(step, &request).await {
                return Ok(RunOutcome::StepFailed(failure));
            }

            if let Some(message) = step.success_message() {
                writeln!(self.writer(), "{message}")?;
            }
        }

        Ok(RunOutcome::Pushed(request))
    }

    /// Runs one step and returns its trimmed output. A non-zero exit, or git not
    /// starting at all, comes back as a `StepFailure` carrying the text to report.
    pub async fn run_step(
        &self,
        step: GitStep,
        request: &CommitRequest,
    ) -> Result<String, StepFailure> {
        let args = step.args(request, self.options().remote());

        match self.git().execute(&args).await {
            Ok(result) if result.success() => Ok(result.output()),
            Ok(result) => {
                let output = result.output();
                let output = match (output.is_empty(), result.status()) {
                    (false, _) => output,
                    (true, Some(code)) => format!("{step} exited with status {code}"),
                    (true, None) => format!("{step} was terminated by a signal"),
                };
                Err(StepFailure::new(step, output))
            }
            Err(error) => Err(StepFailure::new(step, format!("failed to run {step}: {error}"))),
        }
    }

    fn report(&self, outcome: &RunOutcome) -> anyhow::Result<()> {
        let mut writer = self.writer();

        match outcome {
            RunOutcome::Pushed(_) => writeln!(writer, "{}", Message::ChangesPushed)?,
            RunOutcome::GitUnavailable => writeln!(writer, "{}", Message::GitNotInstalled)?,
            RunOutcome::StepFailed(failure) => {
                writeln!(writer, "{}", Message::StepFailed(failure.step()))?;
                writeln!(writer, "{}", Message::ErrorPrefix.paint_with(failure.output()))?;
                writeln!(writer, "{}", Message::ChangesNotPushed)?;
            }
            RunOutcome::Interrupted => {
                // the ^C echo leaves the cursor on the prompt line
                writeln!(writer)?;
                writeln!(writer, "{}", Message::Interrupted)?;
                writeln!(writer, "{}", Message::ChangesNotPushed)?;
            }
            RunOutcome::Aborted(reason) => {
                writeln!(writer)?;
                writeln!(writer, "{}", Message::ErrorPrefix.paint_with(reason))?;
                writeln!(writer, "{}", Message::ChangesNotPushed)?;
            }
        }

        writer.flush()?;
        Ok(())
    }
}
