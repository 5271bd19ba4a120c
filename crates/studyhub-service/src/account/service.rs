//! Registration and login on top of the credential store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use studyhub_auth::jwt::JwtEncoder;
use studyhub_auth::password::PasswordHasher;
use studyhub_core::error::AppError;
use studyhub_core::result::AppResult;
use studyhub_database::store::UserStore;
use studyhub_entity::{CreateUser, User};

/// A freshly issued login session.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    /// Signed bearer token.
    pub access_token: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: User,
}

/// Handles account registration and credential verification.
///
/// Uniqueness of usernames and emails is enforced by the store at insert
/// time, so two concurrent registrations for the same name race safely:
/// exactly one wins and the other surfaces a Duplicate error.
#[derive(Debug, Clone)]
pub struct AccountService {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            encoder,
        }
    }

    /// Registers a new user with a salted password hash.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> AppResult<User> {
        let username = username.trim();
        let email = email.trim();

        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AppError::validation("Missing required fields"));
        }

        let password_hash = self.hasher.hash_password(password)?;

        let user = self
            .users
            .insert(&CreateUser {
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, "Registered new user");

        Ok(user)
    }

    /// Verifies credentials and issues a bearer token.
    ///
    /// An unknown username and a wrong password fail with the same
    /// message so callers cannot probe which accounts exist.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<AuthenticatedSession> {
        let user = self
            .users
            .find_by_username(username.trim())
            .await?
            .ok_or_else(|| AppError::authentication("Invalid username or password"))?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            debug!(username = %user.username, "Password verification failed");
            return Err(AppError::authentication("Invalid username or password"));
        }

        let (access_token, expires_at) = self.encoder.issue(user.id, &user.username)?;

        info!(user_id = %user.id, username = %user.username, "User logged in");

        Ok(AuthenticatedSession {
            access_token,
            expires_at,
            user,
        })
    }
}
