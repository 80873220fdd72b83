use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

const GIT_PROGRAM: &str = "git";

/// Captured result of one git invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommandResult {
    status: Option<i32>,
    stdout: String,
    stderr: String,
}

impl GitCommandResult {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    pub fn status(&self) -> Option<i32> {
        self.status
    }

    /// Standard output followed by standard error, trimmed. Git reports most
    /// failures (and push progress) on standard error.
    pub fn output(&self) -> String {
        [self.stdout.trim(), self.stderr.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The external git executable, resolved through the search path and run from
/// a fixed working directory.
#[derive(Debug)]
pub struct Git {
    cwd: Box<Path>,
}

impl Git {
    pub fn new(cwd: Box<Path>) -> Self {
        Git { cwd }
    }

    pub async fn execute(&self, args: &[String]) -> std::io::Result<GitCommandResult> {
        tracing::debug!(?args, cwd = %self.cwd.display(), "running git");

        // stdin is detached so git never consumes the answers typed at our prompts
        let output = Command::new(GIT_PROGRAM)
            .args(args)
            .current_dir(&self.cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        let result = GitCommandResult {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        tracing::debug!(status = ?result.status, "git exited");

        Ok(result)
    }

    pub async fn is_available(&self) -> bool {
        match self.execute(&["--version".to_string()]).await {
            Ok(result) => result.success(),
            Err(error) => {
                tracing::debug!(%error, "git could not be started");
                false
            }
        }
    }
}
