use crate::common::command::{init_repository_dir, run_gitlet_command, stdout_of};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn rm_staged_file_unstages_it(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    write_file(FileSpec::new(dir.path().join("new.txt"), "new\n".to_string()));
    run_gitlet_command(dir.path(), &["add", "new.txt"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["rm", "new.txt"])
        .assert()
        .success()
        .stdout("");

    // the working copy of an untracked file is left alone
    assert_eq!(read_file(&dir.path().join("new.txt")), "new\n");
    let status = stdout_of(run_gitlet_command(dir.path(), &["status"]))?;
    assert!(status.contains("=== Staged Files ===\n\n"), "unexpected status: {status}");
    assert!(status.contains("=== Removed Files ===\n\n"), "unexpected status: {status}");
    assert!(
        status.contains("=== Untracked Files ===\nnew.txt\n\n"),
        "unexpected status: {status}"
    );

    Ok(())
}
