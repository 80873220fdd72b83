//! Resources a run interacts with
//!
//! - `git`: the external git executable
//! - `log_file`: the append-only run log
//! - `session`: terminal, git and log file bundled for one run

pub mod git;
pub mod log_file;
pub mod session;
