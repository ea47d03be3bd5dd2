use crate::common::command::{init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case("missing")]
#[case("bad..name")]
fn remove_unknown_branch_fails(init_repository_dir: TempDir, #[case] branch: &str) {
    run_gitlet_command(init_repository_dir.path(), &["rm-branch", branch])
        .assert()
        .success()
        .stdout("A branch with that name does not exist.\n");
}

#[rstest]
fn remove_current_branch_fails(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["rm-branch", "master"])
        .assert()
        .success()
        .stdout("Cannot remove the current branch.\n");
}
