//! Resource operations: links, uploads, tag filtering.

pub mod service;

pub use service::{ResourceService, ResourceUpload};
