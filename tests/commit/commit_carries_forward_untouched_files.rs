use crate::common::command::{
    commit_file, commit_id_with_message, head_commit_id, init_repository_dir, log_commit_ids,
    run_gitlet_command, stdout_of,
};
use crate::common::file::{delete_path, read_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_carries_forward_untouched_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    let parent_id = head_commit_id(dir.path())?;

    commit_file(dir.path(), "wug.txt", "wug v2\n", "change wug");

    let commit_id = commit_id_with_message(dir.path(), "change wug")?;
    let history = log_commit_ids(dir.path())?;
    assert_eq!(history[0], commit_id);
    assert_eq!(history[1], parent_id);

    // notwug.txt was not staged but the new commit still tracks it
    delete_path(&dir.path().join("notwug.txt"));
    run_gitlet_command(dir.path(), &["checkout", "--", "notwug.txt"])
        .assert()
        .success()
        .stdout("");
    assert_eq!(read_file(&dir.path().join("notwug.txt")), "not wug\n");

    let status = stdout_of(run_gitlet_command(dir.path(), &["status"]))?;
    assert!(status.contains("=== Staged Files ===\n\n"), "staging was not cleared: {status}");

    Ok(())
}
