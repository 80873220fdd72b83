use crate::areas::session::Session;
use crate::artifacts::messages::message::Message;
use anyhow::Context;
use std::io::Write;
use tokio::io::AsyncBufReadExt;

const COMMIT_MESSAGE_PROMPT: &str = "Please, enter some message for this commit: ";

impl Session {
    pub async fn prompt_commit_message(&mut self) -> anyhow::Result<String> {
        loop {
            let commit_message = self.read_answer(COMMIT_MESSAGE_PROMPT).await?;
            if !commit_message.is_empty() {
                return Ok(commit_message);
            }

            writeln!(self.writer(), "{}", Message::CommitMessageEmpty)?;
        }
    }

    pub async fn prompt_branch_name(&mut self) -> anyhow::Result<String> {
        let default_branch = self.options().default_branch().to_string();
        let prompt = format!("Please, enter the branch name ({default_branch} if not specified): ");

        let branch_name = self.read_answer(&prompt).await?;
        if !branch_name.is_empty() {
            return Ok(branch_name);
        }

        writeln!(
            self.writer(),
            "{}",
            Message::DefaultBranchUsed.paint_with(format!("'{default_branch}'"))
        )?;

        Ok(default_branch)
    }

    /// Prints `prompt` and reads one line, without its line terminator.
    async fn read_answer(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.writer(), "{prompt}")?;
        self.writer().flush()?;

        let mut line = String::new();
        let read = self
            .reader()
            .read_line(&mut line)
            .await
            .context("failed to read from standard input")?;

        if read == 0 {
            anyhow::bail!("standard input was closed before an answer was given");
        }

        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}
