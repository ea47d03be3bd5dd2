use crate::common::command::{init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn corrupt_state_is_reported_on_stderr(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    std::fs::write(dir.path().join(".gitlet").join("STATE"), "not json")?;

    run_gitlet_command(dir.path(), &["status"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("fatal: Corrupt repository state"));

    Ok(())
}
