use crate::common::command::{
    gitlet_commit, init_repository_dir, repository_dir, run_gitlet_command, stdout_of,
};
use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::rstest;
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

#[rstest]
#[case("line\nbreak.txt")]
#[case("carriage\r")]
fn file_names_with_line_breaks_are_refused(
    init_repository_dir: TempDir,
    #[case] file_name: &str,
) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join(file_name), "content\n".to_string()));

    run_gitlet_command(dir, &["add", file_name])
        .assert()
        .success()
        .stdout("File name cannot be tracked.\n");

    gitlet_commit(dir, "nothing staged")
        .assert()
        .success()
        .stdout("No changes added to the commit.\n");
    run_gitlet_command(dir, &["log"]).assert().success();
}

#[rstest]
fn non_utf8_file_names_are_refused(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let file_name = OsStr::from_bytes(b"bad\xff.txt");
    std::fs::write(dir.join(file_name), "content\n")?;

    let mut cmd = Command::cargo_bin("gitlet")?;
    cmd.env("NO_PAGER", "1")
        .current_dir(dir)
        .arg("add")
        .arg(file_name)
        .assert()
        .success()
        .stdout("File name cannot be tracked.\n");

    let status = stdout_of(run_gitlet_command(dir, &["status"]))?;
    assert!(status.contains("=== Staged Files ===\n\n"));

    Ok(())
}

#[rstest]
fn paths_outside_the_repository_do_not_exist(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let outside = repository_dir.path().join("outside.txt");
    let repo = repository_dir.path().join("repo");
    write_file(FileSpec::new(outside.clone(), "outside\n".to_string()));
    std::fs::create_dir_all(&repo)?;
    run_gitlet_command(&repo, &["init"]).assert().success();

    let absolute = std::fs::canonicalize(&outside)?;
    let absolute = absolute.to_str().ok_or("temp path is not UTF-8")?;
    for file_name in ["../outside.txt", absolute] {
        run_gitlet_command(&repo, &["add", file_name])
            .assert()
            .success()
            .stdout("File does not exist.\n");
    }

    gitlet_commit(&repo, "nothing staged")
        .assert()
        .success()
        .stdout("No changes added to the commit.\n");

    Ok(())
}
