use crate::common::command::{init_repository_dir, run_gitlet_command, stdout_of};
use crate::common::file::{FileSpec, delete_path, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn status_reports_every_section(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    run_gitlet_command(dir.path(), &["branch", "other"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.path().join("new.txt"), "new\n".to_string()));
    run_gitlet_command(dir.path(), &["add", "new.txt"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.path().join("gone.txt"), "gone\n".to_string()));
    run_gitlet_command(dir.path(), &["add", "gone.txt"])
        .assert()
        .success();
    delete_path(&dir.path().join("gone.txt"));

    run_gitlet_command(dir.path(), &["rm", "notwug.txt"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.path().join("wug.txt"), "changed\n".to_string()));
    write_file(FileSpec::new(dir.path().join("random.stuff"), "?\n".to_string()));

    let status = stdout_of(run_gitlet_command(dir.path(), &["status"]))?;

    assert_eq!(
        status,
        "=== Branches ===\n\
         *master\n\
         other\n\
         \n\
         === Staged Files ===\n\
         gone.txt\n\
         new.txt\n\
         \n\
         === Removed Files ===\n\
         notwug.txt\n\
         \n\
         === Modifications Not Staged For Commit ===\n\
         gone.txt (deleted)\n\
         wug.txt (modified)\n\
         \n\
         === Untracked Files ===\n\
         random.stuff\n\
         \n"
    );

    Ok(())
}

#[rstest]
fn recreating_a_removed_file_lists_it_as_untracked(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    run_gitlet_command(dir.path(), &["rm", "wug.txt"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.path().join("wug.txt"), "wug\n".to_string()));

    let status = stdout_of(run_gitlet_command(dir.path(), &["status"]))?;

    assert!(status.contains("=== Removed Files ===\nwug.txt\n\n"), "unexpected status: {status}");
    assert!(status.contains("=== Untracked Files ===\nwug.txt\n\n"), "unexpected status: {status}");

    Ok(())
}
