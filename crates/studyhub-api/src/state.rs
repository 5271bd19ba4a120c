//! Application state shared across all handlers.

use std::sync::Arc;

use studyhub_auth::jwt::JwtDecoder;
use studyhub_core::config::AppConfig;
use studyhub_service::account::AccountService;
use studyhub_service::resource::ResourceService;
use studyhub_service::subtopic::SubtopicService;
use studyhub_service::topic::TopicService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Account registration and login service
    pub accounts: Arc<AccountService>,
    /// Topic service
    pub topics: Arc<TopicService>,
    /// Subtopic service
    pub subtopics: Arc<SubtopicService>,
    /// Resource service
    pub resources: Arc<ResourceService>,
}
