use crate::common::command::{init_repository_dir, run_sprig_command, sprig_commit, sprig_stdout};
use crate::common::file::write_file;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn add_a_file_name_with_a_line_break_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(&dir.join("a\nb"), "x");

    run_sprig_command(dir, &["add", "a\nb"])
        .assert()
        .success()
        .stdout("File name cannot be tracked: it must be UTF-8 without line breaks.\n");

    sprig_commit(dir, "line break")
        .assert()
        .success()
        .stdout("No changes added to the commit.\n");
    assert!(sprig_stdout(dir, &["log"]).contains("Add a.txt\n"));
}
