//! Integration tests for the `events` and `tags` commands against a mock API.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

async fn mock_api() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("icsLink"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"events": [
                {
                    "id": "1", "title": "A", "price": 0, "icsLink": "https://ics/1",
                    "url": "https://events/a",
                    "location": {"name": "Bar", "mapsLink": "", "website": ""},
                    "tags": [{"name": "Jazz"}]
                },
                {
                    "id": "2", "title": "B", "price": 5, "icsLink": "https://ics/2",
                    "url": "https://events/b",
                    "location": {"name": "Club", "mapsLink": "", "website": ""},
                    "tags": [{"name": "Techno"}, {"name": "Ab 18 Jahren"}]
                }
            ]}
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"tags": [{"name": "Techno"}, {"name": "Ärger"}, {"name": "Jazz"}]}
        })))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_events_lists_cards() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = TempDir::new().unwrap();
    let server = mock_api().await;

    cargo_bin_cmd!("partyamt")
        .env("PARTYAMT_HOME", home.path())
        .env("PARTYAMT_ENDPOINT", server.uri())
        .arg("events")
        .assert()
        .success()
        .stdout(predicate::str::contains("A\n  Free @ Bar\n  #Jazz"))
        .stdout(predicate::str::contains("[18+] B\n  5.00€ @ Club\n  #Techno\n"))
        .stdout(predicate::str::contains("#Ab 18 Jahren").not());
}

#[tokio::test]
async fn test_events_tag_filter() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = TempDir::new().unwrap();
    let server = mock_api().await;

    cargo_bin_cmd!("partyamt")
        .env("PARTYAMT_HOME", home.path())
        .args(["--endpoint", &server.uri(), "events", "--tag", "Jazz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://events/a"))
        .stdout(predicate::str::contains("[18+] B").not());

    cargo_bin_cmd!("partyamt")
        .env("PARTYAMT_HOME", home.path())
        .args(["--endpoint", &server.uri(), "events", "--tag", "House"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No events match the selected tags."));
}

#[tokio::test]
async fn test_tags_are_sorted() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = TempDir::new().unwrap();
    let server = mock_api().await;

    cargo_bin_cmd!("partyamt")
        .env("PARTYAMT_HOME", home.path())
        .args(["--endpoint", &server.uri(), "tags"])
        .assert()
        .success()
        .stdout("Ärger\nJazz\nTechno\n");
}

#[tokio::test]
async fn test_server_error_fails_command() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    cargo_bin_cmd!("partyamt")
        .env("PARTYAMT_HOME", home.path())
        .args(["--endpoint", &server.uri(), "events"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("load events"))
        .stderr(predicate::str::contains("HTTP 500"));
}
