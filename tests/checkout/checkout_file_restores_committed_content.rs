use crate::common::command::{
    commit_file, commit_id_with_message, init_repository_dir, run_gitlet_command, stdout_of,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_file_from_head(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    write_file(FileSpec::new(dir.path().join("wug.txt"), "scribbled\n".to_string()));

    run_gitlet_command(dir.path(), &["checkout", "--", "wug.txt"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(read_file(&dir.path().join("wug.txt")), "wug\n");

    Ok(())
}

#[rstest]
#[case(40)]
#[case(8)]
fn checkout_file_from_commit_id_prefix(
    init_repository_dir: TempDir,
    #[case] prefix_length: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    let first_id = commit_id_with_message(dir.path(), "two files")?;
    commit_file(dir.path(), "wug.txt", "wug v2\n", "second version");

    let prefix = &first_id[..prefix_length];
    run_gitlet_command(dir.path(), &["checkout", prefix, "--", "wug.txt"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(read_file(&dir.path().join("wug.txt")), "wug\n");
    // the restored version is not staged
    let status = stdout_of(run_gitlet_command(dir.path(), &["status"]))?;
    assert!(status.contains("=== Staged Files ===\n\n"), "unexpected status: {status}");

    Ok(())
}
