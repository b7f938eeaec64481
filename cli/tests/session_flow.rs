//! End-to-end CLI runs against a mock backend.

use std::path::{Path, PathBuf};

use clap::Parser;
use hotel::{ApiError, SessionStore};
use hotel_cli::{Cli, CliError, FileStore, run};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("session.json")
}

fn cli(server: &MockServer, session: &Path, rest: &[&str]) -> Cli {
    let mut argv = vec![
        "hotel-cli".to_owned(),
        "--api-url".to_owned(),
        server.uri(),
        "--session-file".to_owned(),
        session.display().to_string(),
    ];
    argv.extend(rest.iter().map(|s| (*s).to_owned()));
    Cli::try_parse_from(argv).unwrap()
}

fn logged_in(dir: &tempfile::TempDir) -> PathBuf {
    let path = session_path(dir);
    FileStore::new(path.clone()).save("stored-token").unwrap();
    path
}

#[tokio::test]
async fn login_persists_token_and_reports_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "email": "owner@hotel.test", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok-1",
            "user": { "id": 1, "email": "owner@hotel.test", "role": "OWNER" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let session = session_path(&dir);
    let out = run(cli(&server, &session, &["login", "--email", "owner@hotel.test", "--password", "secret"]))
        .await
        .unwrap();

    assert_eq!(out["user"]["role"], "OWNER");
    assert_eq!(FileStore::new(session).load().unwrap().as_deref(), Some("tok-1"));
}

#[tokio::test]
async fn rejected_login_surfaces_backend_message_and_stores_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid credentials" })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let session = session_path(&dir);
    let err = run(cli(&server, &session, &["login", "--email", "x@hotel.test", "--password", "bad"]))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid credentials");
    assert!(!session.exists());
}

#[tokio::test]
async fn anonymous_protected_command_is_refused_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reservation-service/rooms/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let err = run(cli(&server, &session_path(&dir), &["rooms", "list"])).await.unwrap_err();
    assert!(matches!(err, CliError::NotLoggedIn));
}

#[tokio::test]
async fn unauthorized_protected_call_clears_stored_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reservation-service/reservation/all"))
        .and(header("Authorization", "Bearer stored-token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "Token expired" })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let session = logged_in(&dir);
    let err = run(cli(&server, &session, &["reservations", "list"])).await.unwrap_err();

    assert!(matches!(err, CliError::Api(ApiError::Unauthorized { .. })));
    assert!(!session.exists());
}

#[tokio::test]
async fn forbidden_protected_call_keeps_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/users"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "message": "Access denied" })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let session = logged_in(&dir);
    let err = run(cli(&server, &session, &["users", "list"])).await.unwrap_err();

    assert_eq!(err.to_string(), "Access denied");
    assert!(session.exists());
}

#[tokio::test]
async fn reservations_list_filters_by_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reservation-service/reservation/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "guestName": "Ada Lovelace", "guestEmail": "ada@mail.test", "roomId": 2,
              "checkInDate": "2025-03-01", "checkOutDate": "2025-03-03" },
            { "id": 2, "guestName": "Alan Turing", "guestEmail": "alan@mail.test", "roomId": 4,
              "checkInDate": "2025-03-02", "checkOutDate": "2025-03-05" }
        ])))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let session = logged_in(&dir);
    let out = run(cli(&server, &session, &["reservations", "list", "--search", "TURING"])).await.unwrap();

    let rows = out.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], 2);
}

#[tokio::test]
async fn manager_user_delete_is_denied_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/auth/users/3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let session = logged_in(&dir);
    let err = run(cli(&server, &session, &["--role", "MANAGER", "users", "delete", "3"])).await.unwrap_err();

    assert!(matches!(err, CliError::Api(ApiError::Denied(_))));
    assert_eq!(err.to_string(), "Only OWNER can manage users");
}

#[tokio::test]
async fn booking_sends_actor_headers_from_options() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reservation-service/reservation/book"))
        .and(header("Authorization", "Bearer stored-token"))
        .and(header("X-User-Role", "RECEPTIONIST"))
        .and(header("X-User-Email", "desk@hotel.test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "CONFIRMED",
            "reservationId": 41,
            "Price": 160.0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let session = logged_in(&dir);
    let out = run(cli(
        &server,
        &session,
        &[
            "--role",
            "receptionist",
            "--email",
            "desk@hotel.test",
            "reservations",
            "book",
            "--guest-name",
            "Guest",
            "--guest-email",
            "guest@mail.test",
            "--room-id",
            "3",
            "--check-in",
            "2025-03-01",
            "--check-out",
            "2025-03-03",
        ],
    ))
    .await
    .unwrap();

    assert_eq!(out["reservationId"], 41);
}

#[tokio::test]
async fn payment_without_identity_asks_for_options() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let session = logged_in(&dir);

    let err = run(cli(&server, &session, &["payments", "process", "7"])).await.unwrap_err();
    assert!(matches!(err, CliError::IdentityUnknown));
}

#[tokio::test]
async fn logout_removes_session_file() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let session = logged_in(&dir);

    let out = run(cli(&server, &session, &["logout"])).await.unwrap();
    assert_eq!(out["loggedIn"], false);
    assert!(!session.exists());

    let status = run(cli(&server, &session, &["status"])).await.unwrap();
    assert_eq!(status["phase"], "anonymous");
}
