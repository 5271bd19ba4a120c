//! Topic repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use studyhub_core::error::{AppError, ErrorKind};
use studyhub_core::result::AppResult;
use studyhub_entity::topic::{CreateTopic, Topic};

use crate::store::TopicStore;

/// Repository for topic persistence over PostgreSQL.
#[derive(Debug, Clone)]
pub struct TopicRepository {
    pool: PgPool,
}

impl TopicRepository {
    /// Create a new topic repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TopicStore for TopicRepository {
    async fn insert(&self, data: &CreateTopic) -> AppResult<Topic> {
        sqlx::query_as::<_, Topic>(
            "INSERT INTO topics (name, owner_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create topic", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Topic>> {
        sqlx::query_as::<_, Topic>("SELECT * FROM topics WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find topic", e))
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Topic>> {
        sqlx::query_as::<_, Topic>(
            "SELECT * FROM topics WHERE owner_id = $1 ORDER BY created_at ASC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list topics", e))
    }

    async fn search_by_owner(&self, owner_id: Uuid, query: &str) -> AppResult<Vec<Topic>> {
        let pattern = super::substring_pattern(query);
        sqlx::query_as::<_, Topic>(
            "SELECT * FROM topics WHERE owner_id = $1 AND name ILIKE $2 ORDER BY created_at ASC",
        )
        .bind(owner_id)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search topics", e))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM topics WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete topic", e))?;

        Ok(result.rows_affected() > 0)
    }
}
