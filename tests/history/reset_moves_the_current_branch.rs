use crate::common::command::{
    branch_oid, commit_files, init_repository_dir, log_oids, run_sprig_command, sprig_stdout,
};
use crate::common::file::{read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn reset_moves_the_current_branch(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = log_oids(dir)[0].clone();
    commit_files(dir, &[("a.txt", "2"), ("b.txt", "b")], "Second");
    write_file(&dir.join("c.txt"), "c");
    run_sprig_command(dir, &["add", "c.txt"]).assert().success();

    run_sprig_command(dir, &["reset", &first[..10]])
        .assert()
        .success()
        .stdout("");

    assert_eq!(branch_oid(dir, "master").unwrap(), first);
    assert_eq!(read_file(&dir.join("a.txt")), "1");
    assert!(!dir.join("b.txt").exists());

    let status = sprig_stdout(dir, &["status"]);
    assert!(status.contains("=== Staged Files ===\n\n"));
    assert!(status.contains("=== Untracked Files ===\nc.txt\n\n"));
}

#[rstest]
fn reset_to_an_unknown_commit_fails(init_repository_dir: TempDir) {
    run_sprig_command(init_repository_dir.path(), &["reset", "abcdef12"])
        .assert()
        .success()
        .stdout("No commit with that id exists.\n");
}

#[rstest]
fn reset_refuses_to_overwrite_untracked_files(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    commit_files(dir, &[("b.txt", "b")], "Add b.txt");
    let with_b = log_oids(dir)[0].clone();
    run_sprig_command(dir, &["rm", "b.txt"]).assert().success();
    crate::common::command::sprig_commit(dir, "Drop b.txt")
        .assert()
        .success();
    let head = branch_oid(dir, "master");
    write_file(&dir.join("b.txt"), "local");

    run_sprig_command(dir, &["reset", &with_b])
        .assert()
        .success()
        .stdout("There is an untracked file in the way; delete it, or add and commit it first.\n");

    assert_eq!(branch_oid(dir, "master"), head);
    assert_eq!(read_file(&dir.join("b.txt")), "local");
}
