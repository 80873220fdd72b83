//! Operations of a run
//!
//! Each module extends `Session` with one part of the flow:
//!
//! - `preflight`: make sure git can be executed
//! - `prompt`: ask for the commit message and the branch name
//! - `push`: stage, commit and push, then log and report the outcome

pub mod preflight;
pub mod prompt;
pub mod push;
