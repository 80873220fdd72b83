use crate::common::command::{
    LOG_FILE, TestRepository, diverge_remote, remote_head_subject, repository_with_remote,
    run_gitpush_command,
};
use crate::common::read_log_lines;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn rejected_push_is_logged(
    repository_with_remote: TestRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    diverge_remote(&repository_with_remote);

    run_gitpush_command(repository_with_remote.path(), &[])
        .write_stdin("fix bug\n\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Error occurred during 'git push' operation.",
        ))
        .stdout(predicate::str::contains("rejected"))
        .stdout(predicate::str::contains("CHANGES HAVE NOT BEEN PUSHED"));

    // the remote keeps its own history
    assert_eq!(
        remote_head_subject(&repository_with_remote, "master"),
        Some("upstream change".to_string())
    );

    let lines = read_log_lines(repository_with_remote.path(), LOG_FILE);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Result: FAIL | Error: "));
    assert!(lines[0].contains("rejected"));

    Ok(())
}
