use crate::common::command::{
    commit_file, commit_id_with_message, global_log_commit_count, head_commit_id,
    init_repository_dir, run_gitlet_command, stdout_of,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn reset_moves_the_current_branch(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    let target_id = commit_id_with_message(dir.path(), "two files")?;
    commit_file(dir.path(), "wug.txt", "wug v2\n", "second version");
    commit_file(dir.path(), "extra.txt", "extra\n", "extra file");
    write_file(FileSpec::new(dir.path().join("notwug.txt"), "staged\n".to_string()));
    run_gitlet_command(dir.path(), &["add", "notwug.txt"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["reset", &target_id[..10]])
        .assert()
        .success()
        .stdout("");

    assert_eq!(head_commit_id(dir.path())?, target_id);
    assert_eq!(read_file(&dir.path().join("wug.txt")), "wug\n");
    assert_eq!(read_file(&dir.path().join("notwug.txt")), "not wug\n");
    assert!(!dir.path().join("extra.txt").exists());
    let status = stdout_of(run_gitlet_command(dir.path(), &["status"]))?;
    assert!(status.contains("=== Staged Files ===\n\n"), "unexpected status: {status}");
    // later commits remain reachable by id
    assert_eq!(global_log_commit_count(dir.path())?, 4);

    Ok(())
}
