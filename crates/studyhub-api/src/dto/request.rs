//! Request DTOs.
//!
//! Body fields that the services validate are deserialized leniently
//! (missing means empty) so that incomplete requests surface as 400
//! Validation errors with domain messages instead of body rejections.

use serde::{Deserialize, Serialize};

/// Registration request body.
///
/// The email field is named `gmail` on the wire; clients have shipped
/// against that name and it cannot change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Desired username.
    #[serde(default)]
    pub username: String,
    /// Email address (wire name `gmail`).
    #[serde(default)]
    pub gmail: String,
    /// Plaintext password.
    #[serde(default)]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username.
    #[serde(default)]
    pub username: String,
    /// Password.
    #[serde(default)]
    pub password: String,
}

/// Create topic request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTopicRequest {
    /// Topic name.
    #[serde(default)]
    pub name: String,
}

/// Create subtopic request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubtopicRequest {
    /// Subtopic name.
    #[serde(default)]
    pub name: String,
}

/// Create link resource request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResourceRequest {
    /// Resource title.
    #[serde(default)]
    pub title: String,
    /// Link target.
    #[serde(default)]
    pub url: String,
    /// Optional tag.
    pub tag: Option<String>,
}

/// Search query string (`?query=`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Substring to match, case-insensitively.
    #[serde(default)]
    pub query: String,
}

/// Tag filter query string (`?tag=`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagFilterQuery {
    /// Exact tag to filter by.
    pub tag: Option<String>,
}
