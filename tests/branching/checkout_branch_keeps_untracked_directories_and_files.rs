use crate::common::command::{commit_files, init_repository_dir, run_sprig_command, sprig_stdout};
use crate::common::file::{read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;

const IN_THE_WAY: &str =
    "There is an untracked file in the way; delete it, or add and commit it first.\n";

fn commit_on_feature(dir: &Path, files: &[(&str, &str)]) {
    run_sprig_command(dir, &["branch", "feature"])
        .assert()
        .success();
    run_sprig_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    commit_files(dir, files, "Feature files");
    run_sprig_command(dir, &["checkout", "master"])
        .assert()
        .success();
}

#[rstest]
fn untracked_directory_where_the_branch_has_a_file(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    commit_on_feature(dir, &[("foo", "tracked foo")]);
    write_file(&dir.join("foo/user.txt"), "precious");

    run_sprig_command(dir, &["checkout", "feature"])
        .assert()
        .success()
        .stdout(IN_THE_WAY);

    assert_eq!(read_file(&dir.join("foo/user.txt")), "precious");
    assert!(sprig_stdout(dir, &["status"]).contains("*master\n"));
}

#[rstest]
fn untracked_file_where_the_branch_has_a_directory(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    commit_on_feature(dir, &[("d/x", "nested"), ("y", "top level")]);
    write_file(&dir.join("d"), "precious");

    run_sprig_command(dir, &["checkout", "feature"])
        .assert()
        .success()
        .stdout(IN_THE_WAY);

    assert_eq!(read_file(&dir.join("d")), "precious");
    assert!(!dir.join("y").exists());
    assert!(sprig_stdout(dir, &["status"]).contains("*master\n"));
}

#[rstest]
fn reset_refuses_an_untracked_directory_in_the_way(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    commit_on_feature(dir, &[("foo", "tracked foo")]);
    let feature_oid = sprig_stdout(dir, &["find", "Feature files"]);
    write_file(&dir.join("foo/user.txt"), "precious");

    run_sprig_command(dir, &["reset", feature_oid.trim()])
        .assert()
        .success()
        .stdout(IN_THE_WAY);

    assert_eq!(read_file(&dir.join("foo/user.txt")), "precious");
}
