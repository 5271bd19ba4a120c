//! Blob store trait for pluggable upload backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Reference to a stored blob, returned by a successful upload.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BlobRef {
    /// Publicly reachable URL of the stored blob.
    pub url: String,
    /// MIME type the blob was uploaded with.
    pub file_type: String,
    /// Sanitized file name the blob was stored under.
    pub file_name: String,
    /// Size in bytes.
    pub size_bytes: u64,
}

/// Trait for blob upload backends.
///
/// Implementations exist for the local filesystem and S3. The trait is
/// defined here in `studyhub-core` and implemented in `studyhub-storage`,
/// so services depend only on the capability, never on a concrete provider.
#[async_trait]
pub trait BlobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local", "s3").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Store a blob and return a reference to it.
    ///
    /// `file_name` must already be sanitized by the caller.
    async fn upload(&self, file_name: &str, content_type: &str, data: Bytes)
    -> AppResult<BlobRef>;
}
