use crate::common::command::{init_repository_dir, run_sprig_command, sprig_stdout};
use crate::common::file::{delete_path, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn status_reports_deleted_files(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_sprig_command(dir, &["rm", "a.txt"]).assert().success();

    write_file(&dir.join("b.txt"), "b");
    run_sprig_command(dir, &["add", "b.txt"]).assert().success();
    delete_path(&dir.join("b.txt"));

    let expected = "\
=== Branches ===
*master

=== Staged Files ===
b.txt

=== Removed Files ===
a.txt

=== Modifications Not Staged For Commit ===
b.txt (deleted)

=== Untracked Files ===

";

    assert_eq!(sprig_stdout(dir, &["status"]), expected);
}

#[rstest]
fn a_removed_file_written_again_is_untracked(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_sprig_command(dir, &["rm", "a.txt"]).assert().success();
    write_file(&dir.join("a.txt"), "back");

    let status = sprig_stdout(dir, &["status"]);

    assert!(status.contains("=== Removed Files ===\na.txt\n\n"));
    assert!(status.contains("=== Untracked Files ===\na.txt\n\n"));
}

#[rstest]
fn a_tracked_file_deleted_by_hand_is_reported(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    delete_path(&dir.join("a.txt"));

    let status = sprig_stdout(dir, &["status"]);

    assert!(status.contains("=== Modifications Not Staged For Commit ===\na.txt (deleted)\n\n"));
}
