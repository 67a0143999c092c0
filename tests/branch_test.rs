// tests/branch_test.rs
use release_util::git::{current_branch_type, find_branch_type, Git2Status, GitCommandStatus};
use release_util::{BranchType, ReleaseError};
use serial_test::serial;
use std::process::Command;
use tempfile::TempDir;

fn init_repo(branch: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    let repo = git2::Repository::init(dir.path()).unwrap();
    repo.set_head(&format!("refs/heads/{}", branch)).unwrap();
    dir
}

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

#[test]
fn test_current_branch_type_by_root() {
    let cases = [
        ("main", BranchType::Unstable),
        ("branch_9x", BranchType::Stable),
        ("branch_9_1", BranchType::Release),
    ];
    for (branch, expected) in cases {
        let dir = init_repo(branch);
        assert_eq!(current_branch_type(dir.path()).unwrap(), expected);
    }
}

#[test]
fn test_feature_branch_is_unsupported() {
    let dir = init_repo("LUCENE-10000-faster-merges");
    let err = current_branch_type(dir.path()).unwrap_err();
    assert!(matches!(err, ReleaseError::UnsupportedBranch { .. }));
    assert!(err.to_string().contains("on feature branch"));
}

#[test]
#[serial]
fn test_branch_type_of_working_directory() {
    let dir = init_repo("branch_10x");
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = Git2Status::open(".").and_then(|status| find_branch_type(&status));
    std::env::set_current_dir(previous).unwrap();

    assert_eq!(result.unwrap(), BranchType::Stable);
}

#[test]
fn test_git_status_command() {
    if !git_available() {
        return;
    }
    let dir = init_repo("branch_9_12");
    let status = GitCommandStatus::in_dir(dir.path());
    assert_eq!(find_branch_type(&status).unwrap(), BranchType::Release);
}
