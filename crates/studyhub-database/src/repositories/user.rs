//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use studyhub_core::error::{AppError, ErrorKind};
use studyhub_core::result::AppResult;
use studyhub_entity::user::{CreateUser, User};

use crate::store::UserStore;

/// Repository for user persistence over PostgreSQL.
///
/// Uniqueness of username and email is enforced by the `users_username_key`
/// and `users_email_key` constraints; violations are mapped to Duplicate
/// errors so concurrent registrations never both succeed.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn insert(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password_hash) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("users_username_key") =>
            {
                AppError::duplicate(format!("Username '{}' already exists", data.username))
            }
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::duplicate("Email already in use".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
            })
    }
}
