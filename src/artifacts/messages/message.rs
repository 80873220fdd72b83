use crate::artifacts::messages::category::Category;
use crate::artifacts::push::git_step::GitStep;
use colored::ColoredString;

/// A catalog entry. Rendering a message through `Display` paints its text with
/// the color of its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    FilesStaged,
    CommitCreated,
    ChangesPushed,
    DefaultBranchUsed,
    ChangesNotPushed,
    Interrupted,
    TryingToPush,
    ErrorPrefix,
    CommitMessageEmpty,
    GitNotInstalled,
    StepFailed(GitStep),
}

impl Message {
    pub fn category(&self) -> Category {
        match self {
            Message::FilesStaged | Message::CommitCreated | Message::ChangesPushed => {
                Category::Success
            }
            Message::DefaultBranchUsed => Category::Warning,
            Message::ChangesNotPushed | Message::Interrupted => Category::Failure,
            Message::TryingToPush => Category::Information,
            Message::ErrorPrefix
            | Message::CommitMessageEmpty
            | Message::GitNotInstalled
            | Message::StepFailed(_) => Category::Error,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Message::FilesStaged => "FILES ADDED TO STAGING AREA: OK",
            Message::CommitCreated => "COMMIT CREATED: OK",
            Message::ChangesPushed => "CHANGES PUSHED: OK",
            Message::DefaultBranchUsed => "USING DEFAULT BRANCH NAME: ",
            Message::ChangesNotPushed => "CHANGES HAVE NOT BEEN PUSHED",
            Message::Interrupted => "YOU PRESSED CTRL+C TO END SCRIPT EXECUTION",
            Message::TryingToPush => "TRYING TO PUSH CHANGES...",
            Message::ErrorPrefix => "ERROR: ",
            Message::CommitMessageEmpty => {
                "Commit message cannot be empty. Please, enter a valid commit message"
            }
            Message::GitNotInstalled => {
                "Git is not installed or accessible. Please, install Git and try again."
            }
            Message::StepFailed(GitStep::Add) => "Error occurred during 'git add' operation.",
            Message::StepFailed(GitStep::Commit) => {
                "Error occurred during 'git commit' operation."
            }
            Message::StepFailed(GitStep::Push) => "Error occurred during 'git push' operation.",
        }
    }

    /// Paints the message text followed by `suffix`, e.g. the default branch name
    /// after `DefaultBranchUsed` or captured git output after `ErrorPrefix`.
    pub fn paint_with(&self, suffix: impl std::fmt::Display) -> ColoredString {
        self.category()
            .paint(&format!("{}{}", self.text(), suffix))
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.category().paint(self.text()))
    }
}
