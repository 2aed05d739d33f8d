use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("partyamt")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("events"))
        .stdout(predicate::str::contains("tags"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--endpoint"));
}

#[test]
fn test_events_help_shows_tag_flag() {
    cargo_bin_cmd!("partyamt")
        .args(["events", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--tag"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("partyamt")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_endpoint_is_rejected() {
    let home = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("partyamt")
        .env("PARTYAMT_HOME", home.path())
        .env_remove("PARTYAMT_ENDPOINT")
        .args(["--endpoint", "not a url", "tags"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid endpoint URL"));
}
