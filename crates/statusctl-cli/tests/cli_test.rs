//! CLI integration tests using assert_cmd
//!
//! These tests verify the CLI commands work correctly end-to-end.

use assert_cmd::Command;
use git2::{Repository, Signature};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a command instance for the statusctl binary
fn statusctl_cmd() -> Command {
    Command::cargo_bin("statusctl").expect("Failed to find statusctl binary")
}

/// Repository with one committed file
fn init_repo(path: &Path) {
    fs::create_dir_all(path).unwrap();
    let repo = Repository::init(path).unwrap();
    fs::write(path.join("main.txt"), "committed\n").unwrap();
    let mut index = repo.index().unwrap();
    index.add_path(Path::new("main.txt")).unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
    let sig = Signature::now("Test", "test@example.com").unwrap();
    repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
        .unwrap();
}

/// Write a config file listing the given paths
fn write_config(dir: &Path, collections: &[&Path], repositories: &[&Path]) -> PathBuf {
    let mut yaml = String::from("collections:\n");
    for path in collections {
        yaml.push_str(&format!("  - '{}'\n", path.display()));
    }
    yaml.push_str("repositories:\n");
    for path in repositories {
        yaml.push_str(&format!("  - '{}'\n", path.display()));
    }
    let config_path = dir.join("config.yaml");
    fs::write(&config_path, yaml).unwrap();
    config_path
}

#[test]
fn test_help_command() {
    statusctl_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("working-tree status"));
}

#[test]
fn test_version_command() {
    statusctl_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("statusctl"));
}

#[test]
fn test_no_arguments_prints_help() {
    statusctl_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_first_run_creates_config() {
    let home = TempDir::new().unwrap();
    let config_path = home.path().join(".config/statusctl/config.yaml");

    statusctl_cmd()
        .env("HOME", home.path())
        .arg("run")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Created empty config file"));

    assert!(config_path.is_file());
    assert_eq!(fs::read_to_string(&config_path).unwrap(), "");

    // Second run finds the empty file and scans nothing
    statusctl_cmd()
        .env("HOME", home.path())
        .arg("run")
        .assert()
        .success()
        .stdout("\ncollections:\n\nrepositories:\n\n");
}

#[test]
fn test_explicit_config_is_bootstrapped() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nested/dir/custom.yaml");

    statusctl_cmd()
        .arg("list")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    assert!(config_path.is_file());
}

#[test]
fn test_list_echoes_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(
        &config_path,
        "collections:\n  - ~/src\nrepositories:\n  - ../dotfiles\n",
    )
    .unwrap();

    statusctl_cmd()
        .args(["--config"])
        .arg(&config_path)
        .arg("list")
        .assert()
        .success()
        .stdout("\ncollections:\n  ~/src\n\nrepositories:\n  ../dotfiles\n\n");
}

#[test]
fn test_run_reports_collections_then_repositories() {
    let temp_dir = TempDir::new().unwrap();
    let col = temp_dir.path().join("col");
    let repo_a = temp_dir.path().join("repoA");
    init_repo(&col.join("repoB"));
    init_repo(&col.join("repoC"));
    fs::write(col.join("repoC").join("main.txt"), "committed, then edited\n").unwrap();
    init_repo(&repo_a);
    let config_path = write_config(temp_dir.path(), &[&col], &[&repo_a]);

    let expected = format!(
        "\ncollections:\n  CLEAN    {}\n  UNCLEAN  {}\n\nrepositories:\n  CLEAN    {}\n\n",
        col.join("repoB").display(),
        col.join("repoC").display(),
        repo_a.display()
    );

    statusctl_cmd()
        .arg("--config")
        .arg(&config_path)
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn test_run_alias_and_jobs() {
    let temp_dir = TempDir::new().unwrap();
    let repo = temp_dir.path().join("repo");
    init_repo(&repo);
    fs::write(repo.join("scratch.txt"), "untracked").unwrap();
    let config_path = write_config(temp_dir.path(), &[], &[&repo]);

    statusctl_cmd()
        .arg("--config")
        .arg(&config_path)
        .args(["r", "--jobs", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("  UNCLEAN  {}", repo.display())));
}

#[test]
fn test_per_path_errors_keep_exit_status() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");
    let plain = temp_dir.path().join("plain");
    fs::create_dir(&plain).unwrap();
    let config_path = write_config(temp_dir.path(), &[], &[&missing, &plain]);

    statusctl_cmd()
        .arg("--config")
        .arg(&config_path)
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("  ERROR    {}", missing.display())))
        .stdout(predicate::str::contains(format!("  ERROR    {}", plain.display())));
}

#[test]
fn test_missing_collection_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("no-such-collection");
    let repo = temp_dir.path().join("repo");
    init_repo(&repo);
    let config_path = write_config(temp_dir.path(), &[&missing], &[&repo]);

    statusctl_cmd()
        .arg("--config")
        .arg(&config_path)
        .arg("run")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("CLEAN").not())
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Cannot read collection"));
}

#[test]
fn test_invalid_config_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, "collections: [unterminated\n").unwrap();

    statusctl_cmd()
        .arg("--config")
        .arg(&config_path)
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}

#[test]
fn test_run_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let repo = temp_dir.path().join("repo");
    init_repo(&repo);
    let config_path = write_config(temp_dir.path(), &[], &[&repo]);

    let output = statusctl_cmd()
        .arg("--config")
        .arg(&config_path)
        .args(["run", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"status\": \"clean\""));
    assert!(stdout.contains("\"repositories\""));
    assert!(stdout.contains("\"summary\""));
}
