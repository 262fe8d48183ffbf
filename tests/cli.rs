//! End-to-end CLI tests for the hatch binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hatch() -> Command {
    Command::cargo_bin("hatch").unwrap()
}

/// A directory ready for `hatch init`: contains `src/` but no store yet.
fn workspace_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("src")).unwrap();
    temp_dir
}

fn init_workspace(root: &Path) {
    hatch()
        .args(["init", "-w"])
        .arg(root)
        .assert()
        .success();
}

fn profile_config(root: &Path) -> String {
    fs::read_to_string(root.join(".hatch/profiles/default/config.yaml")).unwrap()
}

#[test]
fn version_banner() {
    hatch()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hatch_colcon"))
        .stdout(predicate::str::contains("BSD 3-Clause"));
}

#[test]
fn no_verb_fails_with_help() {
    hatch()
        .assert()
        .failure()
        .stderr(predicate::str::contains("No verb provided"));
}

#[test]
fn init_requires_existing_directory() {
    let temp_dir = TempDir::new().unwrap();
    hatch()
        .args(["init", "-w"])
        .arg(temp_dir.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn init_requires_src_directory() {
    let temp_dir = TempDir::new().unwrap();
    hatch()
        .args(["init", "-w"])
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not contain a 'src' directory"));
}

#[test]
fn init_creates_store_and_default_profile() {
    let temp_dir = workspace_dir();
    hatch()
        .args(["init", "-w"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initializing workspace"))
        .stdout(predicate::str::contains("Profile:"));

    assert!(temp_dir.path().join(".hatch/profiles/profiles.yaml").is_file());
    assert!(temp_dir
        .path()
        .join(".hatch/profiles/default/config.yaml")
        .is_file());
}

#[test]
fn init_twice_is_idempotent() {
    let temp_dir = workspace_dir();
    init_workspace(temp_dir.path());

    // Customize the default profile, then re-init: the customization must
    // survive and the second init must still exit 0.
    hatch()
        .args(["config", "--build-space", "custombuild", "-w"])
        .arg(temp_dir.path())
        .assert()
        .success();

    hatch()
        .args(["init", "-w"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("already been initialized"));

    assert!(profile_config(temp_dir.path()).contains("custombuild"));
}

#[test]
fn init_inside_existing_workspace_fails() {
    let temp_dir = workspace_dir();
    init_workspace(temp_dir.path());

    let nested = temp_dir.path().join("src/inner");
    fs::create_dir_all(nested.join("src")).unwrap();

    hatch()
        .args(["init", "-w"])
        .arg(&nested)
        .assert()
        .failure()
        .stderr(predicate::str::contains("existing workspace already exists"));
}

#[test]
fn config_persists_space_override() {
    let temp_dir = workspace_dir();
    init_workspace(temp_dir.path());

    hatch()
        .args(["config", "--install-space", "deploy", "-w"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("deploy"));

    assert!(profile_config(temp_dir.path()).contains("install_space: deploy"));
}

#[test]
fn config_space_suffix_applies_to_defaults() {
    let temp_dir = workspace_dir();
    init_workspace(temp_dir.path());

    hatch()
        .args(["config", "--space-suffix=-rel", "-w"])
        .arg(temp_dir.path())
        .assert()
        .success();

    let config = profile_config(temp_dir.path());
    assert!(config.contains("build_space: build-rel"));
    assert!(config.contains("install_space: install-rel"));
    assert!(config.contains("test_result_space: test_results-rel"));
}

#[test]
fn config_colcon_args_pass_through_splitter() {
    let temp_dir = workspace_dir();
    init_workspace(temp_dir.path());

    hatch()
        .arg("config")
        .args(["--colcon-build-args", "--symlink-install", "-j4", "--", "-w"])
        .arg(temp_dir.path())
        .assert()
        .success();

    let config = profile_config(temp_dir.path());
    assert!(config.contains("--symlink-install"));
    assert!(config.contains("-j4"));
}

#[test]
fn config_missing_profile_fails() {
    let temp_dir = workspace_dir();
    init_workspace(temp_dir.path());

    hatch()
        .args(["config", "--profile", "release", "--nice", "5", "-w"])
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profile 'release' does not exist"));
}

#[test]
fn config_outside_workspace_fails() {
    let temp_dir = TempDir::new().unwrap();
    hatch()
        .args(["config", "--nice", "5", "-w"])
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Parent colcon workspace directory does not exist",
        ));
}

#[test]
fn build_outside_workspace_fails() {
    let temp_dir = TempDir::new().unwrap();
    hatch()
        .args(["build", "-w"])
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Parent colcon workspace directory does not exist",
        ));
}

#[test]
fn build_missing_workspace_path_fails() {
    let temp_dir = TempDir::new().unwrap();
    hatch()
        .args(["build", "-w"])
        .arg(temp_dir.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}
