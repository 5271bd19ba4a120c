//! Blob provider selection from configuration.

use std::sync::Arc;

use studyhub_core::config::BlobConfig;
use studyhub_core::error::AppError;
use studyhub_core::result::AppResult;
use studyhub_core::traits::BlobStore;

use crate::providers::local::LocalBlobStore;
#[cfg(feature = "s3")]
use crate::providers::s3::S3BlobStore;

/// Build the blob store named by `config.provider`.
pub async fn create_blob_store(config: &BlobConfig) -> AppResult<Arc<dyn BlobStore>> {
    match config.provider.as_str() {
        "local" => {
            let store = LocalBlobStore::new(&config.local).await?;
            Ok(Arc::new(store))
        }
        #[cfg(feature = "s3")]
        "s3" => {
            let store = S3BlobStore::new(&config.s3).await?;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "s3"))]
        "s3" => Err(AppError::configuration(
            "S3 blob provider requested but the 's3' feature is not enabled",
        )),
        other => Err(AppError::configuration(format!(
            "Unknown blob provider: {other}"
        ))),
    }
}
