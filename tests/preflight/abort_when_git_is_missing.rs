use crate::common::command::{LOG_FILE, empty_dir, run_gitpush_command};
use crate::common::read_log_lines;
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn abort_when_git_is_missing(empty_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    // an empty search path leaves no git executable to find
    let bin_dir = TempDir::new()?;

    run_gitpush_command(empty_dir.path(), &[])
        .env("PATH", bin_dir.path())
        .write_stdin("fix bug\n\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Git is not installed or accessible. Please, install Git and try again.",
        ))
        .stdout(predicate::str::contains("Please, enter").not());

    let lines = read_log_lines(empty_dir.path(), LOG_FILE);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(
        "Commit message: N/A | Branch name: N/A | Result: FAIL | Error: Git is not installed or accessible. Please, install Git and try again."
    ));

    Ok(())
}

#[rstest]
fn missing_git_is_logged_to_requested_file(
    empty_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let bin_dir = TempDir::new()?;

    run_gitpush_command(empty_dir.path(), &["--log-file", "push.log"])
        .env("PATH", bin_dir.path())
        .assert()
        .code(1);

    assert_eq!(read_log_lines(empty_dir.path(), "push.log").len(), 1);
    assert!(!empty_dir.path().join(LOG_FILE).exists());

    Ok(())
}
