use crate::common::command::{branch_oid, init_repository_dir, run_sprig_command, sprig_stdout};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("feature")]
#[case("topic/nested")]
fn branch_creates_a_pointer_at_head(init_repository_dir: TempDir, #[case] name: &str) {
    let dir = init_repository_dir.path();

    run_sprig_command(dir, &["branch", name])
        .assert()
        .success()
        .stdout("");

    assert_eq!(branch_oid(dir, name), branch_oid(dir, "master"));
    let status = sprig_stdout(dir, &["status"]);
    assert!(status.contains(&format!("\n{}\n", name)));
    assert!(status.contains("*master\n"));
}

#[rstest]
fn branch_with_a_taken_name_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_sprig_command(dir, &["branch", "master"])
        .assert()
        .success()
        .stdout("A branch with that name already exists.\n");
}
