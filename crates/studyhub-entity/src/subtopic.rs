//! Subtopic entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A subtopic nested under a topic.
///
/// Subtopics carry no owner of their own; ownership is derived from the
/// parent topic at request time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Subtopic {
    /// Unique subtopic identifier.
    pub id: Uuid,
    /// Subtopic name.
    pub name: String,
    /// Parent topic ID.
    pub topic_id: Uuid,
    /// When the subtopic was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new subtopic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubtopic {
    /// Subtopic name.
    pub name: String,
    /// Parent topic ID.
    pub topic_id: Uuid,
}
