use crate::common::command::{init_repository_dir, run_sprig_command, sprig_stdout};
use crate::common::file::write_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn status_reports_every_section(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_sprig_command(dir, &["branch", "feature"])
        .assert()
        .success();

    write_file(&dir.join("b.txt"), "b");
    run_sprig_command(dir, &["add", "b.txt"]).assert().success();
    write_file(&dir.join("c.txt"), "c");
    write_file(&dir.join("a.txt"), "changed");

    let expected = "\
=== Branches ===
feature
*master

=== Staged Files ===
b.txt

=== Removed Files ===

=== Modifications Not Staged For Commit ===
a.txt (modified)

=== Untracked Files ===
c.txt

";

    assert_eq!(sprig_stdout(dir, &["status"]), expected);
}

#[rstest]
fn status_of_a_clean_tree_lists_only_branches(init_repository_dir: TempDir) {
    let expected = "\
=== Branches ===
*master

=== Staged Files ===

=== Removed Files ===

=== Modifications Not Staged For Commit ===

=== Untracked Files ===

";

    assert_eq!(sprig_stdout(init_repository_dir.path(), &["status"]), expected);
}
