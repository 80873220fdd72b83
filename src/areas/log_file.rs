use crate::artifacts::log::log_entry::LogEntry;
use anyhow::Context;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

pub const DEFAULT_LOG_FILE: &str = "logs.txt";

/// Append-only run log. The file is opened once, before git is touched, so an
/// unwritable log stops the run before anything is pushed. No locking is done:
/// concurrent writers from other processes are not arbitrated.
#[derive(Debug)]
pub struct LogFile {
    path: Box<Path>,
    file: File,
}

impl LogFile {
    pub fn open(path: Box<Path>) -> anyhow::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;

        Ok(LogFile { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, entry: &LogEntry) -> anyhow::Result<()> {
        writeln!(&self.file, "{entry}")
            .with_context(|| format!("failed to write log file {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), "run logged");
        Ok(())
    }
}
