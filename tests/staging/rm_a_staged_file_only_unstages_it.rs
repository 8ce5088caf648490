use crate::common::command::{init_repository_dir, run_sprig_command, sprig_stdout};
use crate::common::file::{read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn rm_a_staged_file_only_unstages_it(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(&dir.join("b.txt"), "b");
    run_sprig_command(dir, &["add", "b.txt"]).assert().success();

    run_sprig_command(dir, &["rm", "b.txt"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(read_file(&dir.join("b.txt")), "b");
    let status = sprig_stdout(dir, &["status"]);
    assert!(status.contains("=== Staged Files ===\n\n"));
    assert!(status.contains("=== Untracked Files ===\nb.txt\n\n"));
}
