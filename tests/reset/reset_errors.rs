use crate::common::command::{
    commit_file, commit_id_with_message, head_commit_id, init_repository_dir, run_gitlet_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("ffffffffffffffffffffffffffffffffffffffff")]
#[case("xyz")]
fn reset_to_unknown_commit_fails(init_repository_dir: TempDir, #[case] commit_id: &str) {
    run_gitlet_command(init_repository_dir.path(), &["reset", commit_id])
        .assert()
        .success()
        .stdout("No commit with that id exists.\n");
}

#[rstest]
fn reset_refuses_to_overwrite_untracked_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    commit_file(dir.path(), "extra.txt", "committed\n", "extra file");
    let target_id = commit_id_with_message(dir.path(), "extra file")?;
    run_gitlet_command(dir.path(), &["rm", "extra.txt"])
        .assert()
        .success();
    commit_file(dir.path(), "wug.txt", "later\n", "later");
    write_file(FileSpec::new(dir.path().join("extra.txt"), "mine\n".to_string()));
    let head_id = head_commit_id(dir.path())?;

    run_gitlet_command(dir.path(), &["reset", &target_id])
        .assert()
        .success()
        .stdout("There is an untracked file in the way; delete it, or add and commit it first.\n");

    assert_eq!(head_commit_id(dir.path())?, head_id);
    assert_eq!(read_file(&dir.path().join("extra.txt")), "mine\n");

    Ok(())
}
