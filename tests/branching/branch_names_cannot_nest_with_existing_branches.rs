use crate::common::command::{branch_oid, init_repository_dir, run_sprig_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("topic/one", "topic")]
#[case("topic", "topic/one")]
fn branch_names_cannot_nest_with_existing_branches(
    init_repository_dir: TempDir,
    #[case] existing: &str,
    #[case] requested: &str,
) {
    let dir = init_repository_dir.path();
    run_sprig_command(dir, &["branch", existing])
        .assert()
        .success();

    run_sprig_command(dir, &["branch", requested])
        .assert()
        .success()
        .stdout(format!(
            "Branch name {} clashes with an existing branch.\n",
            requested
        ));

    assert_eq!(branch_oid(dir, existing), branch_oid(dir, "master"));
    assert_eq!(branch_oid(dir, requested), None);
}
