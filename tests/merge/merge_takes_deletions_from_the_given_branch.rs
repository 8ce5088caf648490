use crate::common::command::{
    commit_files, init_repository_dir, run_sprig_command, sprig_commit, sprig_stdout,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn merge_takes_deletions_from_the_given_branch(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    commit_files(dir, &[("b.txt", "b")], "Add b.txt");
    run_sprig_command(dir, &["branch", "feature"])
        .assert()
        .success();
    commit_files(dir, &[("c.txt", "c")], "Master adds c.txt");

    run_sprig_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    run_sprig_command(dir, &["rm", "a.txt"]).assert().success();
    sprig_commit(dir, "Feature drops a.txt").assert().success();
    run_sprig_command(dir, &["checkout", "master"])
        .assert()
        .success();

    run_sprig_command(dir, &["merge", "feature"])
        .assert()
        .success()
        .stdout("");

    assert!(!dir.join("a.txt").exists());
    assert_eq!(read_file(&dir.join("b.txt")), "b");
    assert_eq!(read_file(&dir.join("c.txt")), "c");

    run_sprig_command(dir, &["checkout", "--", "a.txt"])
        .assert()
        .success()
        .stdout("File does not exist in that commit.\n");
    assert!(sprig_stdout(dir, &["status"]).contains("=== Removed Files ===\n\n"));
}
