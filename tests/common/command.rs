use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

/// Date stamped on commits made through [`sprig_commit`]
pub const COMMIT_DATE: &str = "2023-01-01 12:00:00 +0000";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Initialized repository whose `master` holds `a.txt` = "1" on top of the
/// root commit
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_sprig_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    commit_files(repository_dir.path(), &[("a.txt", "1")], "Add a.txt");

    repository_dir
}

pub fn run_sprig_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("sprig").expect("Failed to find sprig binary");
    cmd.env_remove("SPRIG_COMMIT_DATE");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn sprig_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_sprig_command(dir, &["commit", message]);
    cmd.env("SPRIG_COMMIT_DATE", COMMIT_DATE);
    cmd
}

/// Write and stage every file, then commit them
pub fn commit_files(dir: &Path, files: &[(&str, &str)], message: &str) {
    for (path, content) in files {
        crate::common::file::write_file(&dir.join(path), content);
        run_sprig_command(dir, &["add", path]).assert().success();
    }

    sprig_commit(dir, message).assert().success();
}

/// Stdout of a run that must succeed
pub fn sprig_stdout(dir: &Path, args: &[&str]) -> String {
    let output = run_sprig_command(dir, args).assert().success();

    String::from_utf8(output.get_output().stdout.clone()).expect("stdout is not UTF-8")
}

/// Commit a branch points at, read straight from the branch table
pub fn branch_oid(dir: &Path, branch: &str) -> Option<String> {
    let branch_path = dir.join(".sprig/refs/heads").join(branch);

    std::fs::read_to_string(branch_path)
        .ok()
        .map(|content| content.trim().to_string())
}

/// Commit ids printed by `log`, newest first
pub fn log_oids(dir: &Path) -> Vec<String> {
    sprig_stdout(dir, &["log"])
        .lines()
        .filter_map(|line| line.strip_prefix("commit "))
        .map(str::to_string)
        .collect()
}

/// Two repositories side by side: `local` holds `a.txt` = "1" on top of the
/// root commit and knows `remote` as `origin`; `remote` is freshly initialized
#[fixture]
pub fn paired_repositories() -> TempDir {
    let root = TempDir::new().expect("Failed to create temp dir");
    let local = root.path().join("local");
    let remote = root.path().join("remote");
    std::fs::create_dir_all(&local).expect("Failed to create local dir");
    std::fs::create_dir_all(&remote).expect("Failed to create remote dir");

    run_sprig_command(&remote, &["init"]).assert().success();
    run_sprig_command(&local, &["init"]).assert().success();
    commit_files(&local, &[("a.txt", "1")], "Add a.txt");
    run_sprig_command(&local, &["add-remote", "origin", "../remote/.sprig"])
        .assert()
        .success();

    root
}
