//! Integration tests for registration, login, and token handling.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_register_returns_user_id() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/register",
            Some(serde_json::json!({
                "username": "alice",
                "gmail": "alice@example.com",
                "password": "correct-horse",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert!(response.data()["user_id"].as_str().is_some());
}

#[tokio::test]
async fn test_register_missing_fields_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/register",
            Some(serde_json::json!({ "username": "alice" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION");
    assert_eq!(response.body["message"], "Missing required fields");
}

#[tokio::test]
async fn test_register_duplicate_username_is_bad_request() {
    let app = TestApp::new().await;
    app.register_and_login("alice", "pw-one-two-three").await;

    let response = app
        .request(
            "POST",
            "/api/register",
            Some(serde_json::json!({
                "username": "alice",
                "gmail": "other@example.com",
                "password": "pw-four-five-six",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "DUPLICATE");
}

#[tokio::test]
async fn test_register_duplicate_email_is_bad_request() {
    let app = TestApp::new().await;
    app.register_and_login("alice", "pw-one-two-three").await;

    let response = app
        .request(
            "POST",
            "/api/register",
            Some(serde_json::json!({
                "username": "bob",
                "gmail": "alice@example.com",
                "password": "pw-four-five-six",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "DUPLICATE");
}

#[tokio::test]
async fn test_login_returns_token_and_user() {
    let app = TestApp::new().await;
    app.register_and_login("alice", "correct-horse").await;

    let response = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({
                "username": "alice",
                "password": "correct-horse",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data()["access_token"].as_str().is_some());
    assert!(response.data()["expires_at"].as_str().is_some());
    assert_eq!(response.data()["user"]["username"], "alice");
    assert!(response.data()["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_failures_share_one_message() {
    let app = TestApp::new().await;
    app.register_and_login("alice", "correct-horse").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({
                "username": "alice",
                "password": "battery-staple",
            })),
            None,
        )
        .await;
    let unknown_user = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({
                "username": "nobody",
                "password": "battery-staple",
            })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body["message"], unknown_user.body["message"]);
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/topics", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", "/api/topics", None, Some("not-a-jwt"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "ok");
}
