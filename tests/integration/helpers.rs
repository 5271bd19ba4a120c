//! Shared test helpers for integration tests.
//!
//! Builds the full application router over the in-memory store backend
//! and a temp-dir blob store, so tests need no external services.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use studyhub_auth::jwt::{JwtDecoder, JwtEncoder};
use studyhub_auth::password::PasswordHasher;
use studyhub_core::config::{AppConfig, LocalBlobConfig};
use studyhub_database::StoreBackend;
use studyhub_service::account::AccountService;
use studyhub_service::ownership::OwnershipResolver;
use studyhub_service::resource::ResourceService;
use studyhub_service::subtopic::SubtopicService;
use studyhub_service::topic::TopicService;
use studyhub_storage::providers::local::LocalBlobStore;

pub const TEST_BOUNDARY: &str = "studyhub-test-boundary";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    _blob_dir: tempfile::TempDir,
}

impl TestApp {
    /// Create a new test application over fresh in-memory state.
    pub async fn new() -> Self {
        let blob_dir = tempfile::tempdir().expect("Failed to create blob tempdir");

        let mut config = AppConfig::default();
        config.database.provider = "memory".to_string();
        config.blob.local = LocalBlobConfig {
            root_path: blob_dir.path().display().to_string(),
            public_base_url: "http://localhost:8080/blobs".to_string(),
        };

        let store = StoreBackend::memory();
        let blobs = Arc::new(
            LocalBlobStore::new(&config.blob.local)
                .await
                .expect("Failed to init blob store"),
        );

        let hasher = Arc::new(PasswordHasher::new());
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let resolver = OwnershipResolver::new(
            store.topics.clone(),
            store.subtopics.clone(),
            store.resources.clone(),
        );

        let state = studyhub_api::AppState {
            config: Arc::new(config.clone()),
            jwt_decoder,
            accounts: Arc::new(AccountService::new(
                store.users.clone(),
                hasher,
                jwt_encoder,
            )),
            topics: Arc::new(TopicService::new(
                store.topics.clone(),
                store.subtopics.clone(),
                store.resources.clone(),
                resolver.clone(),
            )),
            subtopics: Arc::new(SubtopicService::new(
                store.subtopics.clone(),
                store.resources.clone(),
                resolver.clone(),
            )),
            resources: Arc::new(ResourceService::new(
                store.resources.clone(),
                blobs,
                resolver,
                config.blob.max_upload_size_bytes,
            )),
        };

        Self {
            router: studyhub_api::build_router(state),
            _blob_dir: blob_dir,
        }
    }

    /// Register a user and return their token via login.
    pub async fn register_and_login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/register",
                Some(serde_json::json!({
                    "username": username,
                    "gmail": format!("{}@example.com", username),
                    "password": password,
                })),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );

        self.login(username, password).await
    }

    /// Login and return the bearer token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/login",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                })),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["access_token"]
            .as_str()
            .expect("No access_token in login response")
            .to_string()
    }

    /// Create a topic and return its ID.
    pub async fn create_topic(&self, token: &str, name: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/topics",
                Some(serde_json::json!({ "name": name })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.body["data"]["id"].as_str().unwrap().to_string()
    }

    /// Create a subtopic and return its ID.
    pub async fn create_subtopic(&self, token: &str, topic_id: &str, name: &str) -> String {
        let response = self
            .request(
                "POST",
                &format!("/api/topics/{topic_id}/subtopics"),
                Some(serde_json::json!({ "name": name })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.body["data"]["id"].as_str().unwrap().to_string()
    }

    /// Create a link resource and return its ID.
    pub async fn create_resource(
        &self,
        token: &str,
        subtopic_id: &str,
        title: &str,
        tag: Option<&str>,
    ) -> String {
        let response = self
            .request(
                "POST",
                &format!("/api/subtopics/{subtopic_id}/resources"),
                Some(serde_json::json!({
                    "title": title,
                    "url": "https://example.com",
                    "tag": tag,
                })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.body["data"]["id"].as_str().unwrap().to_string()
    }

    /// Make a JSON HTTP request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Make a multipart upload request to the test app.
    ///
    /// Each part is `(name, file_name, content_type, bytes)`; text parts
    /// pass `None` for the file name and content type.
    pub async fn upload(
        &self,
        path: &str,
        token: &str,
        parts: &[(&str, Option<&str>, Option<&str>, &[u8])],
    ) -> TestResponse {
        let mut body = Vec::new();
        for (name, file_name, content_type, data) in parts {
            body.extend_from_slice(format!("--{TEST_BOUNDARY}\r\n").as_bytes());
            match file_name {
                Some(file_name) => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n"
                        )
                        .as_bytes(),
                    );
                }
                None => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{name}\"\r\n").as_bytes(),
                    );
                }
            }
            if let Some(content_type) = content_type {
                body.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
            }
            body.extend_from_slice(b"\r\n");
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{TEST_BOUNDARY}--\r\n").as_bytes());

        let req = Request::builder()
            .method("POST")
            .uri(path)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={TEST_BOUNDARY}"),
            )
            .header("Authorization", format!("Bearer {token}"))
            .body(Body::from(body))
            .expect("Failed to build upload request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body (`Value::Null` when not JSON).
    pub body: Value,
}

impl TestResponse {
    /// The `data` field of the success envelope.
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    /// The `error` code of an error body.
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or("")
    }
}
