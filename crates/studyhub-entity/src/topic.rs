//! Topic entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A top-level topic owned by a single user.
///
/// The owner reference is a plain column; referential integrity of the
/// Topic → Subtopic → Resource chain is maintained by the application.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Topic {
    /// Unique topic identifier.
    pub id: Uuid,
    /// Topic name.
    pub name: String,
    /// The owning user's ID.
    pub owner_id: Uuid,
    /// When the topic was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTopic {
    /// Topic name.
    pub name: String,
    /// The owning user's ID.
    pub owner_id: Uuid,
}
