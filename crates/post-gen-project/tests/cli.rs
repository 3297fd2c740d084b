//! Integration tests for the post-gen-project binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn post_gen() -> Command {
    Command::cargo_bin("post-gen-project").expect("Failed to find post-gen-project binary")
}

fn generated_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("my_pkg")).unwrap();
    fs::write(root.join("my_pkg/__init__.py"), "").unwrap();
    fs::write(root.join("my_pkg/cli.py"), "import typer\n").unwrap();
    fs::write(root.join("LICENSE"), "MIT License\n").unwrap();
    fs::write(root.join(".pre-commit-config.yaml"), "repos: []\n").unwrap();
    temp
}

fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are valid UTF-8")
}

#[test]
fn test_cleanup_command_removes_cli() {
    let project = generated_project();

    post_gen()
        .args([
            "--project-root",
            path_arg(project.path()),
            "--package-name",
            "my_pkg",
            "--command-line-interface",
            "No",
            "--license-type",
            "MIT",
            "--install-pre-commit-hooks",
            "Yes",
            "cleanup",
        ])
        .assert()
        .success();

    assert!(!project.path().join("my_pkg/cli.py").exists());
    assert!(project.path().join("LICENSE").is_file());
    assert!(project.path().join(".pre-commit-config.yaml").is_file());
}

#[test]
fn test_cleanup_command_twice_succeeds() {
    let project = generated_project();
    let args = [
        "--project-root".to_string(),
        path_arg(project.path()).to_string(),
        "--package-name".to_string(),
        "my_pkg".to_string(),
        "--command-line-interface".to_string(),
        "No".to_string(),
        "--license-type".to_string(),
        "No-license".to_string(),
        "--install-pre-commit-hooks".to_string(),
        "No".to_string(),
        "cleanup".to_string(),
    ];

    post_gen().args(&args).assert().success();
    post_gen().args(&args).assert().success();

    assert!(!project.path().join("my_pkg/cli.py").exists());
    assert!(!project.path().join("LICENSE").exists());
    assert!(!project.path().join(".pre-commit-config.yaml").exists());
    assert!(project.path().join("my_pkg/__init__.py").is_file());
}

#[test]
fn test_context_file_values_are_used() {
    let project = generated_project();
    let context = project.path().join("context.yaml");
    fs::write(
        &context,
        "package_name: my_pkg\n\
         command_line_interface: \"No\"\n\
         license_type: something odd\n\
         install_pre_commit_hooks: \"Yes\"\n",
    )
    .unwrap();

    post_gen()
        .args([
            "cleanup",
            "--project-root",
            path_arg(project.path()),
            "--context-file",
            path_arg(&context),
        ])
        .assert()
        .success();

    assert!(!project.path().join("my_pkg/cli.py").exists());
    // unrecognized license text falls back to No-license
    assert!(!project.path().join("LICENSE").exists());
    assert!(project.path().join(".pre-commit-config.yaml").is_file());
}

#[test]
fn test_missing_project_root_fails() {
    let temp = TempDir::new().unwrap();

    post_gen()
        .args(["--project-root", path_arg(&temp.path().join("missing")), "cleanup"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing"));
}

#[test]
fn test_unknown_license_option_is_rejected() {
    let project = generated_project();

    post_gen()
        .args([
            "--project-root",
            path_arg(project.path()),
            "--license-type",
            "WTFPL",
            "cleanup",
        ])
        .assert()
        .failure();

    assert!(project.path().join("LICENSE").is_file());
}

#[test]
fn test_git_init_command_is_idempotent() {
    if !git_available() {
        return;
    }
    let project = generated_project();
    let root = path_arg(project.path());

    post_gen()
        .args(["--project-root", root, "git-init"])
        .assert()
        .success();
    assert!(project.path().join(".git/objects").is_dir());

    let head = fs::read(project.path().join(".git/HEAD")).unwrap();
    post_gen()
        .args(["--project-root", root, "git-init"])
        .assert()
        .success();
    assert_eq!(fs::read(project.path().join(".git/HEAD")).unwrap(), head);
}

#[test]
fn test_default_pipeline_without_hooks() {
    if !git_available() {
        return;
    }
    let project = generated_project();

    post_gen()
        .args([
            "--project-root",
            path_arg(project.path()),
            "--package-name",
            "my_pkg",
            "--command-line-interface",
            "Yes",
            "--license-type",
            "No-license",
            "--install-pre-commit-hooks",
            "No",
        ])
        .assert()
        .success();

    let root = project.path();
    assert!(!root.join("LICENSE").exists());
    assert!(!root.join(".pre-commit-config.yaml").exists());
    assert!(root.join("my_pkg/cli.py").is_file());
    assert!(root.join(".git").is_dir());
    assert!(!root.join(".git/hooks/pre-commit").exists());
}
