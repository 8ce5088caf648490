use crate::common::command::{branch_oid, init_repository_dir, run_sprig_command, sprig_commit};
use crate::common::file::write_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_with_nothing_staged_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let before = branch_oid(dir, "master");

    sprig_commit(dir, "Empty")
        .assert()
        .success()
        .stdout("No changes added to the commit.\n");

    assert_eq!(branch_oid(dir, "master"), before);
}

#[rstest]
#[case("")]
#[case("   ")]
fn commit_with_a_blank_message_fails(init_repository_dir: TempDir, #[case] message: &str) {
    let dir = init_repository_dir.path();
    write_file(&dir.join("b.txt"), "b");
    run_sprig_command(dir, &["add", "b.txt"]).assert().success();

    sprig_commit(dir, message)
        .assert()
        .success()
        .stdout("Please enter a commit message.\n");
}

#[rstest]
fn commit_without_a_message_is_a_usage_error(init_repository_dir: TempDir) {
    run_sprig_command(init_repository_dir.path(), &["commit"])
        .assert()
        .code(2);
}
