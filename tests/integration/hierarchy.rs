//! Integration tests for topics and subtopics, including ownership
//! scoping and cascading deletion.

use http::StatusCode;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_topics_are_scoped_to_owner() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice", "pw-alice-123").await;
    let bob = app.register_and_login("bob", "pw-bob-123").await;

    app.create_topic(&alice, "Rust").await;
    app.create_topic(&bob, "Go").await;

    let response = app.request("GET", "/api/topics", None, Some(&alice)).await;
    assert_eq!(response.status, StatusCode::OK);
    let topics = response.data().as_array().unwrap();
    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0]["name"], "Rust");
}

#[tokio::test]
async fn test_create_topic_without_name_is_bad_request() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice", "pw-alice-123").await;

    let response = app
        .request(
            "POST",
            "/api/topics",
            Some(serde_json::json!({})),
            Some(&alice),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Topic name is required");
}

#[tokio::test]
async fn test_topic_search_is_case_insensitive_substring() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice", "pw-alice-123").await;
    app.create_topic(&alice, "Rust Programming").await;
    app.create_topic(&alice, "Trust Building").await;
    app.create_topic(&alice, "Cooking").await;

    let response = app
        .request("GET", "/api/topics/search?query=rUsT", None, Some(&alice))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let hits = response.data().as_array().unwrap();
    assert_eq!(hits.len(), 2);
}

#[tokio::test]
async fn test_subtopics_under_foreign_topic_are_forbidden() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice", "pw-alice-123").await;
    let bob = app.register_and_login("bob", "pw-bob-123").await;
    let topic_id = app.create_topic(&alice, "Rust").await;

    let response = app
        .request(
            "POST",
            &format!("/api/topics/{topic_id}/subtopics"),
            Some(serde_json::json!({ "name": "Async" })),
            Some(&bob),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["message"], "Access denied");

    let response = app
        .request(
            "GET",
            &format!("/api/topics/{topic_id}/subtopics"),
            None,
            Some(&bob),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_missing_topic_is_not_found_before_ownership() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice", "pw-alice-123").await;

    let response = app
        .request(
            "GET",
            &format!("/api/topics/{}/subtopics", Uuid::new_v4()),
            None,
            Some(&alice),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Topic not found");
}

#[tokio::test]
async fn test_subtopic_search_within_topic() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice", "pw-alice-123").await;
    let topic_id = app.create_topic(&alice, "Rust").await;
    app.create_subtopic(&alice, &topic_id, "Async Runtime").await;
    app.create_subtopic(&alice, &topic_id, "Error Handling").await;

    let response = app
        .request(
            "GET",
            &format!("/api/topics/{topic_id}/subtopics/search?query=async"),
            None,
            Some(&alice),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let hits = response.data().as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["name"], "Async Runtime");
}

#[tokio::test]
async fn test_delete_topic_cascades_to_children() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice", "pw-alice-123").await;
    let topic_id = app.create_topic(&alice, "Rust").await;
    let subtopic_id = app.create_subtopic(&alice, &topic_id, "Async").await;
    app.create_resource(&alice, &subtopic_id, "Tokio tutorial", None)
        .await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/topics/{topic_id}"),
            None,
            Some(&alice),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // The whole chain is gone, not just the topic row.
    let response = app
        .request(
            "GET",
            &format!("/api/topics/{topic_id}/subtopics"),
            None,
            Some(&alice),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "GET",
            &format!("/api/subtopics/{subtopic_id}/resources"),
            None,
            Some(&alice),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_topic_twice_is_not_found() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice", "pw-alice-123").await;
    let topic_id = app.create_topic(&alice, "Rust").await;

    let first = app
        .request(
            "DELETE",
            &format!("/api/topics/{topic_id}"),
            None,
            Some(&alice),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app
        .request(
            "DELETE",
            &format!("/api/topics/{topic_id}"),
            None,
            Some(&alice),
        )
        .await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_subtopic_with_mismatched_topic_is_not_found() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice", "pw-alice-123").await;
    let topic_id = app.create_topic(&alice, "Rust").await;
    let other_topic_id = app.create_topic(&alice, "Go").await;
    let subtopic_id = app.create_subtopic(&alice, &topic_id, "Async").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/topics/{other_topic_id}/subtopics/{subtopic_id}"),
            None,
            Some(&alice),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    // The subtopic survives under its real parent.
    let response = app
        .request(
            "GET",
            &format!("/api/topics/{topic_id}/subtopics"),
            None,
            Some(&alice),
        )
        .await;
    assert_eq!(response.data().as_array().unwrap().len(), 1);
}
