//! Values flowing through one add/commit/push run
//!
//! - `commit_request`: the answers collected from the user
//! - `git_step`: the three git subcommands, in the order they run
//! - `outcome`: how a run ended and what that means for the exit status

pub mod commit_request;
pub mod git_step;
pub mod outcome;
