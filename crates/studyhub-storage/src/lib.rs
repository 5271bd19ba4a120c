//! # studyhub-storage
//!
//! Blob store providers implementing the [`studyhub_core::traits::BlobStore`]
//! trait: local filesystem (default) and S3 (behind the `s3` feature).

pub mod filename;
pub mod provider;
pub mod providers;

pub use provider::create_blob_store;
