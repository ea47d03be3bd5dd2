use crate::common::command::{
    commit_file, commit_id_with_message, global_log_commit_count, init_repository_dir,
    run_gitlet_command, stdout_of,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn global_log_lists_every_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    run_gitlet_command(dir.path(), &["branch", "other"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["checkout", "other"])
        .assert()
        .success();
    commit_file(dir.path(), "other.txt", "other\n", "on other");
    run_gitlet_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();

    let other_id = commit_id_with_message(dir.path(), "on other")?;
    let log = stdout_of(run_gitlet_command(dir.path(), &["log"]))?;
    let global_log = stdout_of(run_gitlet_command(dir.path(), &["global-log"]))?;

    assert!(!log.contains(&other_id));
    assert!(global_log.contains(&format!("commit {other_id}\n")));
    assert_eq!(global_log_commit_count(dir.path())?, 3);

    Ok(())
}

#[rstest]
fn removed_branches_keep_their_commits(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    run_gitlet_command(dir.path(), &["branch", "doomed"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["checkout", "doomed"])
        .assert()
        .success();
    commit_file(dir.path(), "doomed.txt", "doomed\n", "on doomed");
    run_gitlet_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["rm-branch", "doomed"])
        .assert()
        .success();

    assert_eq!(global_log_commit_count(dir.path())?, 3);
    commit_id_with_message(dir.path(), "on doomed")?;

    Ok(())
}
