use crate::artifacts::messages::message::Message;
use crate::artifacts::push::commit_request::CommitRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GitStep {
    Add,
    Commit,
    Push,
}

impl GitStep {
    /// Steps in execution order. A step only runs once the previous one succeeded.
    pub const ALL: [GitStep; 3] = [GitStep::Add, GitStep::Commit, GitStep::Push];

    pub fn label(&self) -> &'static str {
        match self {
            GitStep::Add => "add",
            GitStep::Commit => "commit",
            GitStep::Push => "push",
        }
    }

    pub fn args(&self, request: &CommitRequest, remote: &str) -> Vec<String> {
        match self {
            GitStep::Add => vec!["add".to_string(), ".".to_string()],
            GitStep::Commit => vec![
                "commit".to_string(),
                "-m".to_string(),
                request.commit_message().to_string(),
            ],
            GitStep::Push => vec![
                "push".to_string(),
                "-u".to_string(),
                remote.to_string(),
                request.branch_name().to_string(),
            ],
        }
    }

    /// Message printed right after the step succeeds. The push step has none:
    /// its success is reported once the run has been logged.
    pub fn success_message(&self) -> Option<Message> {
        match self {
            GitStep::Add => Some(Message::FilesStaged),
            GitStep::Commit => Some(Message::CommitCreated),
            GitStep::Push => None,
        }
    }
}

impl std::fmt::Display for GitStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "git {}", self.label())
    }
}
