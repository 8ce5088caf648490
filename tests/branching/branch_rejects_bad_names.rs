use crate::common::command::{init_repository_dir, run_sprig_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case("bad..name")]
#[case(".hidden")]
#[case("ends.lock")]
#[case("trailing/")]
#[case("with space")]
#[case("what?")]
fn branch_rejects_bad_names(init_repository_dir: TempDir, #[case] name: &str) {
    let dir = init_repository_dir.path();

    run_sprig_command(dir, &["branch", name])
        .assert()
        .success()
        .stdout(format!("Invalid branch name: {}\n", name));

    assert!(!dir.join(".sprig/refs/heads").join(name).exists());
}
