//! Blob upload provider configuration.

use serde::{Deserialize, Serialize};

/// Top-level blob storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlobConfig {
    /// Blob provider to use: `"local"` or `"s3"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Maximum upload size in bytes (default 25 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// Local filesystem blob configuration.
    #[serde(default)]
    pub local: LocalBlobConfig,
    /// S3-compatible blob configuration.
    #[serde(default)]
    pub s3: S3BlobConfig,
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            max_upload_size_bytes: default_max_upload(),
            local: LocalBlobConfig::default(),
            s3: S3BlobConfig::default(),
        }
    }
}

/// Local filesystem blob configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalBlobConfig {
    /// Root path for uploaded blobs.
    #[serde(default = "default_local_root")]
    pub root_path: String,
    /// Base URL prepended to stored blob keys when building public URLs.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
}

impl Default for LocalBlobConfig {
    fn default() -> Self {
        Self {
            root_path: default_local_root(),
            public_base_url: default_public_base_url(),
        }
    }
}

/// S3-compatible object storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3BlobConfig {
    /// S3 endpoint URL (for non-AWS services like MinIO).
    #[serde(default)]
    pub endpoint: String,
    /// AWS region.
    #[serde(default = "default_region")]
    pub region: String,
    /// S3 bucket name.
    #[serde(default)]
    pub bucket: String,
    /// Base URL prepended to object keys when building public URLs.
    #[serde(default)]
    pub public_base_url: String,
}

impl Default for S3BlobConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            region: default_region(),
            bucket: String::new(),
            public_base_url: String::new(),
        }
    }
}

fn default_provider() -> String {
    "local".to_string()
}

fn default_max_upload() -> u64 {
    26_214_400 // 25 MB
}

fn default_local_root() -> String {
    "./data/blobs".to_string()
}

fn default_public_base_url() -> String {
    "http://localhost:8080/blobs".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}
