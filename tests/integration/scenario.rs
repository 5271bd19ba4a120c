//! End-to-end scenario walking the whole API surface in one session.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_full_study_session_lifecycle() {
    let app = TestApp::new().await;

    // Register and log in.
    let token = app.register_and_login("alice", "correct-horse").await;

    // Build a small hierarchy.
    let topic_id = app.create_topic(&token, "Distributed Systems").await;
    let papers = app.create_subtopic(&token, &topic_id, "Papers").await;
    let lectures = app.create_subtopic(&token, &topic_id, "Lectures").await;

    app.create_resource(&token, &papers, "Raft paper", Some("consensus"))
        .await;
    let upload = app
        .upload(
            &format!("/api/subtopics/{lectures}/resources/upload"),
            &token,
            &[
                ("title", None, None, b"Lecture 1".as_slice()),
                (
                    "file",
                    Some("lecture1.pdf"),
                    Some("application/pdf"),
                    b"%PDF-1.4 slides".as_slice(),
                ),
            ],
        )
        .await;
    assert_eq!(upload.status, StatusCode::CREATED);

    // Everything is visible to the owner.
    let topics = app.request("GET", "/api/topics", None, Some(&token)).await;
    assert_eq!(topics.data().as_array().unwrap().len(), 1);

    let subtopics = app
        .request(
            "GET",
            &format!("/api/topics/{topic_id}/subtopics"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(subtopics.data().as_array().unwrap().len(), 2);

    let tags = app.request("GET", "/api/tags", None, Some(&token)).await;
    assert_eq!(tags.data()["tags"], serde_json::json!(["consensus"]));

    // Delete the topic; the entire tree disappears.
    let deleted = app
        .request(
            "DELETE",
            &format!("/api/topics/{topic_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    for path in [
        format!("/api/topics/{topic_id}/subtopics"),
        format!("/api/subtopics/{papers}/resources"),
        format!("/api/subtopics/{lectures}/resources"),
    ] {
        let response = app.request("GET", &path, None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
    }

    // Tag listing reflects the cascade.
    let tags = app.request("GET", "/api/tags", None, Some(&token)).await;
    assert_eq!(tags.data()["tags"], serde_json::json!([]));

    let topics = app.request("GET", "/api/topics", None, Some(&token)).await;
    assert!(topics.data().as_array().unwrap().is_empty());
}
