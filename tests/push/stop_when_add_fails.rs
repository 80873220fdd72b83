use crate::common::command::{LOG_FILE, empty_dir, run_gitpush_command};
use crate::common::file::write_generated_files;
use crate::common::read_log_lines;
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn stop_when_add_fails(empty_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    // files, but no repository around them
    write_generated_files(empty_dir.path(), 2);

    run_gitpush_command(empty_dir.path(), &[])
        .write_stdin("fix bug\nmain\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("TRYING TO PUSH CHANGES..."))
        .stdout(predicate::str::contains(
            "Error occurred during 'git add' operation.",
        ))
        .stdout(predicate::str::contains("CHANGES HAVE NOT BEEN PUSHED"))
        .stdout(predicate::str::contains("FILES ADDED TO STAGING AREA: OK").not());

    let lines = read_log_lines(empty_dir.path(), LOG_FILE);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(
        "Commit message: fix bug | Branch name: main | Result: FAIL | Error: "
    ));
    assert!(lines[0].to_lowercase().contains("not a git repository"));

    Ok(())
}
