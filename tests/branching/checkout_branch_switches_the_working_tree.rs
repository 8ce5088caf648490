use crate::common::command::{
    branch_oid, commit_files, init_repository_dir, log_oids, run_sprig_command, sprig_stdout,
};
use crate::common::file::{read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_branch_switches_the_working_tree(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_sprig_command(dir, &["branch", "feature"])
        .assert()
        .success();
    run_sprig_command(dir, &["checkout", "feature"])
        .assert()
        .success()
        .stdout("");
    commit_files(dir, &[("a.txt", "2"), ("nested/b.txt", "b")], "Feature work");

    run_sprig_command(dir, &["checkout", "master"])
        .assert()
        .success();
    assert_eq!(read_file(&dir.join("a.txt")), "1");
    assert!(!dir.join("nested/b.txt").exists());
    assert!(!dir.join("nested").exists());
    assert_eq!(log_oids(dir)[0], branch_oid(dir, "master").unwrap());

    run_sprig_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    assert_eq!(read_file(&dir.join("a.txt")), "2");
    assert_eq!(read_file(&dir.join("nested/b.txt")), "b");
    assert_eq!(log_oids(dir)[0], branch_oid(dir, "feature").unwrap());
}

#[rstest]
fn checkout_branch_clears_the_staging_area(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_sprig_command(dir, &["branch", "feature"])
        .assert()
        .success();
    write_file(&dir.join("c.txt"), "c");
    run_sprig_command(dir, &["add", "c.txt"]).assert().success();

    run_sprig_command(dir, &["checkout", "feature"])
        .assert()
        .success();

    let status = sprig_stdout(dir, &["status"]);
    assert!(status.starts_with("=== Branches ===\n*feature\nmaster\n\n"));
    assert!(status.contains("=== Staged Files ===\n\n"));
    assert!(status.contains("=== Untracked Files ===\nc.txt\n\n"));
}

#[rstest]
#[case("nope", "No such branch exists.\n")]
#[case("master", "No need to checkout the current branch.\n")]
fn checkout_branch_errors(
    init_repository_dir: TempDir,
    #[case] branch: &str,
    #[case] message: &str,
) {
    run_sprig_command(init_repository_dir.path(), &["checkout", branch])
        .assert()
        .success()
        .stdout(message.to_string());
}
