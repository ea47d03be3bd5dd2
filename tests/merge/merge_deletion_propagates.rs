use crate::common::command::{
    commit_file, commit_id_with_message, gitlet_commit, gitlet_merge, init_repository_dir,
    run_gitlet_command,
};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn merge_deletion_propagates(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    run_gitlet_command(dir.path(), &["branch", "other"])
        .assert()
        .success();
    commit_file(dir.path(), "master.txt", "master\n", "on master");
    run_gitlet_command(dir.path(), &["checkout", "other"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["rm", "notwug.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "remove notwug").assert().success();
    run_gitlet_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();
    assert!(dir.path().join("notwug.txt").exists());

    gitlet_merge(dir.path(), "other")
        .assert()
        .success()
        .stdout("");

    assert!(!dir.path().join("notwug.txt").exists());
    let merge_id = commit_id_with_message(dir.path(), "Merged other into master.")?;
    run_gitlet_command(dir.path(), &["checkout", &merge_id, "--", "notwug.txt"])
        .assert()
        .success()
        .stdout("File does not exist in that commit.\n");
    assert!(dir.path().join("master.txt").exists());

    Ok(())
}
