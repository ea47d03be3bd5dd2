use crate::common::command::{
    commit_file, commit_id_with_message, gitlet_merge, global_log_commit_count, head_commit_id,
    init_repository_dir, run_gitlet_command, stdout_of,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// History:
///   A (master) <- B <- C (other)
///
/// Expected: master moves to C, no merge commit is created
#[rstest]
fn merge_fast_forward(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    run_gitlet_command(dir.path(), &["branch", "other"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["checkout", "other"])
        .assert()
        .success();
    commit_file(dir.path(), "wug.txt", "wug on other\n", "B");
    commit_file(dir.path(), "other.txt", "other\n", "C");
    run_gitlet_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();
    let commit_count = global_log_commit_count(dir.path())?;

    gitlet_merge(dir.path(), "other")
        .assert()
        .success()
        .stdout("Current branch fast-forwarded.\n");

    assert_eq!(head_commit_id(dir.path())?, commit_id_with_message(dir.path(), "C")?);
    assert_eq!(global_log_commit_count(dir.path())?, commit_count);
    assert_eq!(read_file(&dir.path().join("wug.txt")), "wug on other\n");
    assert_eq!(read_file(&dir.path().join("other.txt")), "other\n");
    let status = stdout_of(run_gitlet_command(dir.path(), &["status"]))?;
    assert!(status.starts_with("=== Branches ===\n*master\nother\n\n"), "unexpected status: {status}");
    assert!(status.ends_with("=== Untracked Files ===\n\n"), "unexpected status: {status}");

    Ok(())
}
