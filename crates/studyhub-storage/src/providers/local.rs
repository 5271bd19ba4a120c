//! Local filesystem blob store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use studyhub_core::config::LocalBlobConfig;
use studyhub_core::error::{AppError, ErrorKind};
use studyhub_core::result::AppResult;
use studyhub_core::traits::{BlobRef, BlobStore};

/// Blob store writing under a local data root.
///
/// Each blob is stored under a random key prefix so repeated uploads of
/// the same file name never collide.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    /// Root directory for all stored blobs.
    root: PathBuf,
    /// Base URL prepended to blob keys.
    public_base_url: String,
}

impl LocalBlobStore {
    /// Create a new local blob store rooted at the configured path.
    pub async fn new(config: &LocalBlobConfig) -> AppResult<Self> {
        let root = PathBuf::from(&config.root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Upstream,
                format!("Failed to create blob root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self {
            root,
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Upstream,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }

    async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        data: Bytes,
    ) -> AppResult<BlobRef> {
        let key = format!("{}/{}", Uuid::new_v4(), file_name);
        let full_path = self.root.join(&key);
        self.ensure_parent(&full_path).await?;

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Upstream,
                format!("Failed to write blob: {key}"),
                e,
            )
        })?;

        debug!(key, bytes = data.len(), "Stored blob");

        Ok(BlobRef {
            url: format!("{}/{}", self.public_base_url, key),
            file_type: content_type.to_string(),
            file_name: file_name.to_string(),
            size_bytes: data.len() as u64,
        })
    }
}
