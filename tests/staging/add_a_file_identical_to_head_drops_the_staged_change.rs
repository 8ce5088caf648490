use crate::common::command::{init_repository_dir, run_sprig_command, sprig_commit, sprig_stdout};
use crate::common::file::write_file;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn add_a_file_identical_to_head_drops_the_staged_change(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    write_file(&dir.join("a.txt"), "2");
    run_sprig_command(dir, &["add", "a.txt"]).assert().success();
    write_file(&dir.join("a.txt"), "1");
    run_sprig_command(dir, &["add", "a.txt"]).assert().success();

    let status = sprig_stdout(dir, &["status"]);
    assert!(status.contains("=== Staged Files ===\n\n"));

    sprig_commit(dir, "Nothing changed")
        .assert()
        .success()
        .stdout("No changes added to the commit.\n");
}
