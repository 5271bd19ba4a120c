//! Route definitions for the StudyHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`, with
//! the health check at the root. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue, Method},
    routing::{delete, get, post},
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.blob.max_upload_size_bytes as usize;
    let cors = build_cors_layer(&state);

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(topic_routes())
        .merge(subtopic_routes())
        .merge(resource_routes())
        .merge(tag_routes());

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(handlers::health::health))
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Registration and login.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
}

/// Topic CRUD and search.
fn topic_routes() -> Router<AppState> {
    Router::new()
        .route("/topics", get(handlers::topic::list_topics))
        .route("/topics", post(handlers::topic::create_topic))
        .route("/topics/search", get(handlers::topic::search_topics))
        .route("/topics/{topic_id}", delete(handlers::topic::delete_topic))
}

/// Subtopic CRUD and search, nested under topics.
fn subtopic_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/topics/{topic_id}/subtopics",
            get(handlers::subtopic::list_subtopics),
        )
        .route(
            "/topics/{topic_id}/subtopics",
            post(handlers::subtopic::create_subtopic),
        )
        .route(
            "/topics/{topic_id}/subtopics/search",
            get(handlers::subtopic::search_subtopics),
        )
        .route(
            "/topics/{topic_id}/subtopics/{subtopic_id}",
            delete(handlers::subtopic::delete_subtopic),
        )
}

/// Resource CRUD and upload, nested under subtopics.
fn resource_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/subtopics/{subtopic_id}/resources",
            get(handlers::resource::list_resources),
        )
        .route(
            "/subtopics/{subtopic_id}/resources",
            post(handlers::resource::create_resource),
        )
        .route(
            "/subtopics/{subtopic_id}/resources/upload",
            post(handlers::resource::upload_resource),
        )
        .route(
            "/subtopics/{subtopic_id}/resources/{resource_id}",
            delete(handlers::resource::delete_resource),
        )
}

/// Global tag listing.
fn tag_routes() -> Router<AppState> {
    Router::new().route("/tags", get(handlers::tag::list_tags))
}

/// Build the CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let cors = &state.config.server.cors;

    let origins = if cors.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            cors.allowed_origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok()),
        )
    };

    let methods = AllowMethods::list(
        cors.allowed_methods
            .iter()
            .filter_map(|m| m.parse::<Method>().ok()),
    );

    let headers = if cors.allowed_headers.iter().any(|h| h == "*") {
        AllowHeaders::any()
    } else {
        AllowHeaders::list(
            cors.allowed_headers
                .iter()
                .filter_map(|h| h.parse::<HeaderName>().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
        .max_age(Duration::from_secs(cors.max_age_seconds))
}
