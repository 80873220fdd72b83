use derive_new::new;

pub const DEFAULT_BRANCH: &str = "master";
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CommitRequest {
    commit_message: String,
    branch_name: String,
}

impl CommitRequest {
    pub fn commit_message(&self) -> &str {
        &self.commit_message
    }

    pub fn branch_name(&self) -> &str {
        &self.branch_name
    }
}

/// Answers captured so far. A run can end before both prompts were answered,
/// so every field stays optional until the log entry is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitDraft {
    pub commit_message: Option<String>,
    pub branch_name: Option<String>,
}

impl CommitDraft {
    pub fn commit_message_or_placeholder(&self) -> &str {
        self.commit_message.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn branch_name_or_placeholder(&self) -> &str {
        self.branch_name.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}
