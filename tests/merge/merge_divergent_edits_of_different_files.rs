use crate::common::command::{
    branch_oid, commit_files, init_repository_dir, run_sprig_command, sprig_stdout,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// History:
///       A (a.txt = "1", b.txt = "1")
///      / \
///     B   C
///     |   |
///   master  feature
///
/// B changes a.txt, C changes b.txt and adds c.txt
#[rstest]
fn merge_divergent_edits_of_different_files(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    commit_files(dir, &[("b.txt", "1")], "Add b.txt");
    run_sprig_command(dir, &["branch", "feature"])
        .assert()
        .success();

    commit_files(dir, &[("a.txt", "master a")], "Master edits a.txt");
    let master_head = branch_oid(dir, "master").unwrap();

    run_sprig_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    commit_files(
        dir,
        &[("b.txt", "feature b"), ("c.txt", "feature c")],
        "Feature edits b.txt",
    );
    let feature_head = branch_oid(dir, "feature").unwrap();
    run_sprig_command(dir, &["checkout", "master"])
        .assert()
        .success();

    run_sprig_command(dir, &["merge", "feature"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(read_file(&dir.join("a.txt")), "master a");
    assert_eq!(read_file(&dir.join("b.txt")), "feature b");
    assert_eq!(read_file(&dir.join("c.txt")), "feature c");

    let log = sprig_stdout(dir, &["log"]);
    let merge_line = format!("Merge: {} {}\n", &master_head[..7], &feature_head[..7]);
    assert!(log.starts_with("===\ncommit "));
    assert!(log.contains(&merge_line));
    assert!(log.contains("Merged feature into master.\n"));
    assert!(sprig_stdout(dir, &["status"]).contains(
        "=== Staged Files ===\n\n=== Removed Files ===\n\n=== Modifications Not Staged For Commit ===\n\n"
    ));
}
