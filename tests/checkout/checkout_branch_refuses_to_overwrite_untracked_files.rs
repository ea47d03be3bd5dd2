use crate::common::command::{commit_file, init_repository_dir, run_gitlet_command, stdout_of};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_branch_refuses_to_overwrite_untracked_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    run_gitlet_command(dir.path(), &["branch", "other"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["checkout", "other"])
        .assert()
        .success();
    commit_file(dir.path(), "extra.txt", "from other\n", "extra on other");
    commit_file(dir.path(), "wug.txt", "other wug\n", "wug on other");
    run_gitlet_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.path().join("extra.txt"), "mine\n".to_string()));

    run_gitlet_command(dir.path(), &["checkout", "other"])
        .assert()
        .success()
        .stdout("There is an untracked file in the way; delete it, or add and commit it first.\n");

    // nothing was touched
    assert_eq!(read_file(&dir.path().join("extra.txt")), "mine\n");
    assert_eq!(read_file(&dir.path().join("wug.txt")), "wug\n");
    let status = stdout_of(run_gitlet_command(dir.path(), &["status"]))?;
    assert!(status.starts_with("=== Branches ===\n*master\nother\n\n"), "unexpected status: {status}");

    Ok(())
}
