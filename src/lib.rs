//! Interactive helper that stages everything, commits it with a prompted message
//! and pushes it to a prompted branch, logging one line per run.

use clap::ValueEnum;
use is_terminal::IsTerminal;

pub mod areas;
pub mod artifacts;
pub mod commands;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Always,
    Auto,
    Never,
}

impl ColorChoice {
    pub fn apply(self) {
        let enabled = match self {
            ColorChoice::Always => true,
            ColorChoice::Auto => std::io::stdout().is_terminal(),
            ColorChoice::Never => false,
        };
        colored::control::set_override(enabled);
    }
}

/// Resolves when the user presses Ctrl+C. If the handler cannot be installed the
/// run simply cannot be interrupted.
pub async fn interrupted() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "unable to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
