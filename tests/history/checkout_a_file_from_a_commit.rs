use crate::common::command::{commit_files, init_repository_dir, log_oids, run_sprig_command};
use crate::common::file::{read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_restores_the_committed_bytes(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let content = "line one\r\nline two\n\ttabbed\n";
    commit_files(dir, &[("a.txt", content)], "Odd bytes");
    write_file(&dir.join("a.txt"), "overwritten");

    run_sprig_command(dir, &["checkout", "--", "a.txt"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(read_file(&dir.join("a.txt")), content);
}

#[rstest]
fn checkout_from_an_abbreviated_commit_id(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = log_oids(dir)[0].clone();
    commit_files(dir, &[("a.txt", "2")], "Change a.txt");

    run_sprig_command(dir, &["checkout", &first[..8], "--", "a.txt"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("a.txt")), "1");
}

#[rstest]
#[case("0000000000")]
#[case("not-hex")]
fn checkout_from_an_unknown_commit_fails(init_repository_dir: TempDir, #[case] commit: &str) {
    run_sprig_command(
        init_repository_dir.path(),
        &["checkout", commit, "--", "a.txt"],
    )
    .assert()
    .success()
    .stdout("No commit with that id exists.\n");
}

#[rstest]
fn checkout_of_an_untracked_path_fails(init_repository_dir: TempDir) {
    run_sprig_command(init_repository_dir.path(), &["checkout", "--", "zzz.txt"])
        .assert()
        .success()
        .stdout("File does not exist in that commit.\n");
}

#[rstest]
fn checkout_without_arguments_is_a_usage_error(init_repository_dir: TempDir) {
    run_sprig_command(init_repository_dir.path(), &["checkout"])
        .assert()
        .code(2);
}
