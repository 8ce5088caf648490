use crate::common::command::{init_repository_dir, paired_repositories, run_sprig_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn a_remote_name_is_registered_once(paired_repositories: TempDir) {
    let local = paired_repositories.path().join("local");

    run_sprig_command(&local, &["add-remote", "origin", "../elsewhere"])
        .assert()
        .success()
        .stdout("A remote with that name already exists.\n");
}

#[rstest]
fn a_removed_remote_can_no_longer_be_used(paired_repositories: TempDir) {
    let local = paired_repositories.path().join("local");

    run_sprig_command(&local, &["rm-remote", "origin"])
        .assert()
        .success()
        .stdout("");

    run_sprig_command(&local, &["push", "origin", "master"])
        .assert()
        .success()
        .stdout("A remote with that name does not exist.\n");
    run_sprig_command(&local, &["rm-remote", "origin"])
        .assert()
        .success()
        .stdout("A remote with that name does not exist.\n");
}

#[rstest]
#[case(&["push", "nowhere", "master"])]
#[case(&["fetch", "nowhere", "master"])]
#[case(&["pull", "nowhere", "master"])]
fn unknown_remotes_are_reported(init_repository_dir: TempDir, #[case] args: &[&str]) {
    run_sprig_command(init_repository_dir.path(), args)
        .assert()
        .success()
        .stdout("A remote with that name does not exist.\n");
}

#[rstest]
#[case("push")]
#[case("fetch")]
fn a_missing_remote_directory_is_reported(init_repository_dir: TempDir, #[case] command: &str) {
    let dir = init_repository_dir.path();
    run_sprig_command(dir, &["add-remote", "ghost", "../does-not-exist/.sprig"])
        .assert()
        .success();

    run_sprig_command(dir, &[command, "ghost", "master"])
        .assert()
        .success()
        .stdout("Remote directory not found.\n");
}

#[rstest]
fn remote_names_cannot_be_hierarchical(init_repository_dir: TempDir) {
    run_sprig_command(
        init_repository_dir.path(),
        &["add-remote", "bad/name", "../elsewhere"],
    )
    .assert()
    .success()
    .stdout("Invalid remote name: bad/name\n");
}
