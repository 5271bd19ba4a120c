//! Resource repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use studyhub_core::error::{AppError, ErrorKind};
use studyhub_core::result::AppResult;
use studyhub_entity::resource::{CreateResource, Resource};

use crate::store::ResourceStore;

/// Repository for resource persistence over PostgreSQL.
#[derive(Debug, Clone)]
pub struct ResourceRepository {
    pool: PgPool,
}

impl ResourceRepository {
    /// Create a new resource repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResourceStore for ResourceRepository {
    async fn insert(&self, data: &CreateResource) -> AppResult<Resource> {
        sqlx::query_as::<_, Resource>(
            "INSERT INTO resources (title, url, tag, subtopic_id, file_type, file_name) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.url)
        .bind(&data.tag)
        .bind(data.subtopic_id)
        .bind(&data.file_type)
        .bind(&data.file_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create resource", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Resource>> {
        sqlx::query_as::<_, Resource>("SELECT * FROM resources WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find resource", e))
    }

    async fn list_by_subtopic(
        &self,
        subtopic_id: Uuid,
        tag: Option<&str>,
    ) -> AppResult<Vec<Resource>> {
        let result = match tag {
            Some(tag) => {
                sqlx::query_as::<_, Resource>(
                    "SELECT * FROM resources WHERE subtopic_id = $1 AND tag = $2 \
                     ORDER BY created_at ASC",
                )
                .bind(subtopic_id)
                .bind(tag)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Resource>(
                    "SELECT * FROM resources WHERE subtopic_id = $1 ORDER BY created_at ASC",
                )
                .bind(subtopic_id)
                .fetch_all(&self.pool)
                .await
            }
        };

        result.map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list resources", e))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete resource", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_subtopics(&self, subtopic_ids: &[Uuid]) -> AppResult<u64> {
        if subtopic_ids.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query("DELETE FROM resources WHERE subtopic_id = ANY($1)")
            .bind(subtopic_ids)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete resources", e)
            })?;

        Ok(result.rows_affected())
    }

    async fn distinct_tags(&self) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT tag FROM resources WHERE tag IS NOT NULL ORDER BY tag ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tags", e))
    }
}
