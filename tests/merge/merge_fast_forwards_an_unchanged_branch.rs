use crate::common::command::{
    branch_oid, commit_files, init_repository_dir, log_oids, run_sprig_command, sprig_stdout,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// History:
///   A (master)
///    \
///     B (feat: a.txt = "2")
///
/// Expected: master moves to B without a new commit
#[rstest]
fn merge_fast_forwards_an_unchanged_branch(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_sprig_command(dir, &["branch", "feat"]).assert().success();
    run_sprig_command(dir, &["checkout", "feat"])
        .assert()
        .success();
    commit_files(dir, &[("a.txt", "2")], "Change a.txt");
    let feat_history = log_oids(dir);
    run_sprig_command(dir, &["checkout", "master"])
        .assert()
        .success();

    run_sprig_command(dir, &["merge", "feat"])
        .assert()
        .success()
        .stdout("Current branch fast-forwarded.\n");

    assert_eq!(branch_oid(dir, "master"), branch_oid(dir, "feat"));
    assert_eq!(log_oids(dir), feat_history);
    assert_eq!(read_file(&dir.join("a.txt")), "2");
    assert!(sprig_stdout(dir, &["status"]).contains("=== Staged Files ===\n\n"));
}
