use crate::common::command::{
    commit_files, init_repository_dir, log_oids, run_sprig_command, sprig_stdout,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn find_commits_by_message(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    commit_files(dir, &[("b.txt", "b")], "Same message");
    commit_files(dir, &[("b.txt", "bb")], "Same message");

    let mut expected = log_oids(dir)[..2].to_vec();
    expected.sort();

    let found = sprig_stdout(dir, &["find", "Same message"]);
    assert_eq!(found.lines().collect::<Vec<_>>(), expected);
}

#[rstest]
fn find_reports_missing_messages(init_repository_dir: TempDir) {
    run_sprig_command(init_repository_dir.path(), &["find", "Add"])
        .assert()
        .success()
        .stdout("Found no commit with that message.\n");
}
