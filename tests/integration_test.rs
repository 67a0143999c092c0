// tests/integration_test.rs
use std::process::Command;

#[test]
fn test_release_util_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_release-util"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("release-util"));
    assert!(stdout.contains("Support library for release scripts"));
}

#[test]
fn test_release_util_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_release-util"))
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("release-util "));
}

#[test]
fn test_direct_invocation_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_release-util"))
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("only a support module"));
}

#[test]
fn test_version_bump_against_build_properties() {
    use release_util::config::Config;
    use release_util::properties::find_current_version;
    use release_util::Version;

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("build-options.properties"),
        "version.base=9.1.2\n",
    )
    .unwrap();

    let config = Config::for_repo(dir.path());
    let current = Version::parse(&find_current_version(&config).unwrap()).unwrap();
    assert!(current.is_bugfix_release());
    assert_eq!(current.constant(), "LUCENE_9_1_2");
    assert!(current
        .previous_dot_matcher()
        .unwrap()
        .is_match("version.base=9.1.1"));
}
