//! Run log entries
//!
//! Every invocation ends with exactly one `LogEntry`, whether the changes were
//! pushed, a git step failed, git was missing, or the user interrupted the run.

pub mod log_entry;
