//! Integration tests for resources: links, uploads, tag filtering, and
//! the global tag listing.

use http::StatusCode;

use crate::helpers::TestApp;

async fn seed_subtopic(app: &TestApp, token: &str) -> String {
    let topic_id = app.create_topic(token, "Rust").await;
    app.create_subtopic(token, &topic_id, "Async").await
}

#[tokio::test]
async fn test_create_link_resource() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice", "pw-alice-123").await;
    let subtopic_id = seed_subtopic(&app, &alice).await;

    let response = app
        .request(
            "POST",
            &format!("/api/subtopics/{subtopic_id}/resources"),
            Some(serde_json::json!({
                "title": "Tokio tutorial",
                "url": "https://tokio.rs/tokio/tutorial",
                "tag": "async",
            })),
            Some(&alice),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.data()["title"], "Tokio tutorial");
    assert_eq!(response.data()["tag"], "async");
    assert!(response.data()["file_type"].is_null());
}

#[tokio::test]
async fn test_create_resource_without_title_is_bad_request() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice", "pw-alice-123").await;
    let subtopic_id = seed_subtopic(&app, &alice).await;

    let response = app
        .request(
            "POST",
            &format!("/api/subtopics/{subtopic_id}/resources"),
            Some(serde_json::json!({ "url": "https://tokio.rs" })),
            Some(&alice),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Title and URL are required");
}

#[tokio::test]
async fn test_create_under_foreign_subtopic_is_forbidden() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice", "pw-alice-123").await;
    let bob = app.register_and_login("bob", "pw-bob-123").await;
    let subtopic_id = seed_subtopic(&app, &alice).await;

    let response = app
        .request(
            "POST",
            &format!("/api/subtopics/{subtopic_id}/resources"),
            Some(serde_json::json!({
                "title": "Sneaky",
                "url": "https://example.com",
            })),
            Some(&bob),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_tag_filter_is_exact_match() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice", "pw-alice-123").await;
    let subtopic_id = seed_subtopic(&app, &alice).await;

    app.create_resource(&alice, &subtopic_id, "Tokio", Some("rust"))
        .await;
    app.create_resource(&alice, &subtopic_id, "Rustlings", Some("rustlings"))
        .await;

    let response = app
        .request(
            "GET",
            &format!("/api/subtopics/{subtopic_id}/resources?tag=rust"),
            None,
            Some(&alice),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let hits = response.data().as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["title"], "Tokio");
}

#[tokio::test]
async fn test_upload_creates_file_resource() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice", "pw-alice-123").await;
    let subtopic_id = seed_subtopic(&app, &alice).await;

    let response = app
        .upload(
            &format!("/api/subtopics/{subtopic_id}/resources/upload"),
            &alice,
            &[
                ("title", None, None, b"Lecture notes".as_slice()),
                ("tag", None, None, b"pdf".as_slice()),
                (
                    "file",
                    Some("lecture notes.pdf"),
                    Some("application/pdf"),
                    b"%PDF-1.4 fake".as_slice(),
                ),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.data()["title"], "Lecture notes");
    assert_eq!(response.data()["file_type"], "application/pdf");
    assert_eq!(response.data()["file_name"], "lecture_notes.pdf");
    let url = response.data()["url"].as_str().unwrap();
    assert!(url.ends_with("/lecture_notes.pdf"), "unexpected url {url}");
}

#[tokio::test]
async fn test_upload_without_file_part_is_bad_request() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice", "pw-alice-123").await;
    let subtopic_id = seed_subtopic(&app, &alice).await;

    let response = app
        .upload(
            &format!("/api/subtopics/{subtopic_id}/resources/upload"),
            &alice,
            &[("title", None, None, b"No file here".as_slice())],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "File is required");
}

#[tokio::test]
async fn test_delete_resource() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice", "pw-alice-123").await;
    let subtopic_id = seed_subtopic(&app, &alice).await;
    let resource_id = app
        .create_resource(&alice, &subtopic_id, "Tokio", None)
        .await;

    let path = format!("/api/subtopics/{subtopic_id}/resources/{resource_id}");
    let first = app.request("DELETE", &path, None, Some(&alice)).await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app.request("DELETE", &path, None, Some(&alice)).await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_tags_listing_is_global_across_users() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice", "pw-alice-123").await;
    let bob = app.register_and_login("bob", "pw-bob-123").await;

    let alice_subtopic = seed_subtopic(&app, &alice).await;
    let bob_topic = app.create_topic(&bob, "Go").await;
    let bob_subtopic = app.create_subtopic(&bob, &bob_topic, "Channels").await;

    app.create_resource(&alice, &alice_subtopic, "Tokio", Some("rust"))
        .await;
    app.create_resource(&bob, &bob_subtopic, "Tour", Some("go"))
        .await;

    let response = app.request("GET", "/api/tags", None, Some(&alice)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data()["tags"],
        serde_json::json!(["go", "rust"]),
        "tags are global and sorted"
    );
}
