//! Subtopic repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use studyhub_core::error::{AppError, ErrorKind};
use studyhub_core::result::AppResult;
use studyhub_entity::subtopic::{CreateSubtopic, Subtopic};

use crate::store::SubtopicStore;

/// Repository for subtopic persistence over PostgreSQL.
#[derive(Debug, Clone)]
pub struct SubtopicRepository {
    pool: PgPool,
}

impl SubtopicRepository {
    /// Create a new subtopic repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubtopicStore for SubtopicRepository {
    async fn insert(&self, data: &CreateSubtopic) -> AppResult<Subtopic> {
        sqlx::query_as::<_, Subtopic>(
            "INSERT INTO subtopics (name, topic_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.topic_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create subtopic", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Subtopic>> {
        sqlx::query_as::<_, Subtopic>("SELECT * FROM subtopics WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find subtopic", e))
    }

    async fn list_by_topic(&self, topic_id: Uuid) -> AppResult<Vec<Subtopic>> {
        sqlx::query_as::<_, Subtopic>(
            "SELECT * FROM subtopics WHERE topic_id = $1 ORDER BY created_at ASC",
        )
        .bind(topic_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list subtopics", e))
    }

    async fn search_by_topic(&self, topic_id: Uuid, query: &str) -> AppResult<Vec<Subtopic>> {
        let pattern = super::substring_pattern(query);
        sqlx::query_as::<_, Subtopic>(
            "SELECT * FROM subtopics WHERE topic_id = $1 AND name ILIKE $2 \
             ORDER BY created_at ASC",
        )
        .bind(topic_id)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search subtopics", e))
    }

    async fn ids_by_topic(&self, topic_id: Uuid) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>("SELECT id FROM subtopics WHERE topic_id = $1")
            .bind(topic_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list subtopic ids", e)
            })
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM subtopics WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete subtopic", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_topic(&self, topic_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM subtopics WHERE topic_id = $1")
            .bind(topic_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete subtopics", e)
            })?;

        Ok(result.rows_affected())
    }
}
