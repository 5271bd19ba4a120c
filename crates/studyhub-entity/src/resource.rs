//! Resource entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A learning resource (link or uploaded file) under a subtopic.
///
/// Ownership is derived transitively through the parent subtopic's topic.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Resource {
    /// Unique resource identifier.
    pub id: Uuid,
    /// Resource title.
    pub title: String,
    /// Link target or uploaded blob URL.
    pub url: String,
    /// Optional tag for exact-match filtering.
    pub tag: Option<String>,
    /// Parent subtopic ID.
    pub subtopic_id: Uuid,
    /// MIME type of the uploaded file, if this resource was uploaded.
    pub file_type: Option<String>,
    /// Stored file name, if this resource was uploaded.
    pub file_name: Option<String>,
    /// When the resource was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResource {
    /// Resource title.
    pub title: String,
    /// Link target or uploaded blob URL.
    pub url: String,
    /// Optional tag.
    pub tag: Option<String>,
    /// Parent subtopic ID.
    pub subtopic_id: Uuid,
    /// MIME type (uploads only).
    pub file_type: Option<String>,
    /// Stored file name (uploads only).
    pub file_name: Option<String>,
}
