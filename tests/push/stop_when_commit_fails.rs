use crate::common::command::{
    LOG_FILE, TestRepository, empty_dir, exclude_log, init_repository, remote_head_subject,
    run_git_command, run_gitpush_command,
};
use crate::common::read_log_lines;
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn stop_when_commit_fails(empty_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    // the run log is the only file and it is excluded: nothing to commit
    init_repository(empty_dir.path(), "master");
    exclude_log(empty_dir.path());
    let remote = TempDir::new()?;
    run_git_command(remote.path(), &["init", "--bare"])
        .assert()
        .success();
    let remote_path = remote.path().canonicalize()?.display().to_string();
    run_git_command(empty_dir.path(), &["remote", "add", "origin", &remote_path])
        .assert()
        .success();
    let repository = TestRepository {
        work: empty_dir,
        remote: Some(remote),
    };

    run_gitpush_command(repository.path(), &[])
        .write_stdin("fix bug\n\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FILES ADDED TO STAGING AREA: OK"))
        .stdout(predicate::str::contains(
            "Error occurred during 'git commit' operation.",
        ))
        .stdout(predicate::str::contains("COMMIT CREATED: OK").not())
        .stdout(predicate::str::contains("'git push'").not());

    // push never ran
    assert_eq!(remote_head_subject(&repository, "master"), None);

    let lines = read_log_lines(repository.path(), LOG_FILE);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(
        "Commit message: fix bug | Branch name: master | Result: FAIL | Error: "
    ));

    Ok(())
}
