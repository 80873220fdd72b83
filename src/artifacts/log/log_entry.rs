use chrono::NaiveDateTime;
use derive_new::new;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogResult {
    Ok,
    Fail(String),
}

/// One line of the run log.
///
/// ```text
/// 2024-05-01 10:00:00 - Commit message: fix bug | Branch name: master | Result: OK
/// 2024-05-01 10:00:00 - Commit message: fix bug | Branch name: master | Result: FAIL | Error: rejected
/// ```
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LogEntry {
    timestamp: NaiveDateTime,
    commit_message: String,
    branch_name: String,
    result: LogResult,
}

impl LogEntry {
    pub fn now(commit_message: &str, branch_name: &str, result: LogResult) -> Self {
        Self::new(
            chrono::Local::now().naive_local(),
            commit_message.to_string(),
            branch_name.to_string(),
            result,
        )
    }
}

// Git error output usually spans several lines; the log keeps one entry per line.
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - Commit message: {} | Branch name: {} | Result: ",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.commit_message,
            self.branch_name
        )?;

        match &self.result {
            LogResult::Ok => write!(f, "OK"),
            LogResult::Fail(error) => write!(f, "FAIL | Error: {}", single_line(error)),
        }
    }
}
