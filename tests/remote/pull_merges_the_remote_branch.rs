use crate::common::command::{
    branch_oid, commit_files, log_oids, paired_repositories, run_sprig_command, sprig_stdout,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn pull_fast_forwards_behind_branches(paired_repositories: TempDir) {
    let local = paired_repositories.path().join("local");
    let remote = paired_repositories.path().join("remote");
    run_sprig_command(&local, &["push", "origin", "master"])
        .assert()
        .success();
    run_sprig_command(&remote, &["checkout", "--", "a.txt"])
        .assert()
        .success();
    commit_files(&remote, &[("a.txt", "remote edit")], "Remote edit");

    run_sprig_command(&local, &["pull", "origin", "master"])
        .assert()
        .success()
        .stdout("Current branch fast-forwarded.\n");

    assert_eq!(branch_oid(&local, "master"), branch_oid(&remote, "master"));
    assert_eq!(read_file(&local.join("a.txt")), "remote edit");
}

#[rstest]
fn pull_merges_diverged_histories(paired_repositories: TempDir) {
    let local = paired_repositories.path().join("local");
    let remote = paired_repositories.path().join("remote");
    commit_files(&remote, &[("r.txt", "remote only")], "Remote work");

    run_sprig_command(&local, &["pull", "origin", "master"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(read_file(&local.join("a.txt")), "1");
    assert_eq!(read_file(&local.join("r.txt")), "remote only");
    assert!(sprig_stdout(&local, &["log"]).contains("Merged origin/master into master.\n"));

    run_sprig_command(&local, &["push", "origin", "master"])
        .assert()
        .success();
    assert_eq!(log_oids(&remote), log_oids(&local));
}
