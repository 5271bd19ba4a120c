//! S3-compatible blob store.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;
use uuid::Uuid;

use studyhub_core::config::S3BlobConfig;
use studyhub_core::error::AppError;
use studyhub_core::result::AppResult;
use studyhub_core::traits::{BlobRef, BlobStore};

/// Blob store backed by an S3-compatible bucket.
#[derive(Debug, Clone)]
pub struct S3BlobStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_base_url: String,
}

impl S3BlobStore {
    /// Create a new S3 blob store from configuration.
    ///
    /// Credentials come from the standard AWS environment/profile chain.
    pub async fn new(config: &S3BlobConfig) -> AppResult<Self> {
        if config.bucket.is_empty() {
            return Err(AppError::configuration("S3 bucket name is required"));
        }

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));
        if !config.endpoint.is_empty() {
            loader = loader.endpoint_url(&config.endpoint);
        }
        let sdk_config = loader.load().await;

        let public_base_url = if config.public_base_url.is_empty() {
            format!(
                "https://{}.s3.{}.amazonaws.com",
                config.bucket, config.region
            )
        } else {
            config.public_base_url.trim_end_matches('/').to_string()
        };

        Ok(Self {
            client: aws_sdk_s3::Client::new(&sdk_config),
            bucket: config.bucket.clone(),
            public_base_url,
        })
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    fn provider_type(&self) -> &str {
        "s3"
    }

    async fn health_check(&self) -> AppResult<bool> {
        let result = self
            .client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await;
        Ok(result.is_ok())
    }

    async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        data: Bytes,
    ) -> AppResult<BlobRef> {
        let key = format!("{}/{}", Uuid::new_v4(), file_name);
        let size_bytes = data.len() as u64;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(content_type)
            .body(data.into())
            .send()
            .await
            .map_err(|e| AppError::upstream(format!("S3 upload failed: {e}")))?;

        debug!(key, bytes = size_bytes, "Stored blob in S3");

        Ok(BlobRef {
            url: format!("{}/{}", self.public_base_url, key),
            file_type: content_type.to_string(),
            file_name: file_name.to_string(),
            size_bytes,
        })
    }
}
