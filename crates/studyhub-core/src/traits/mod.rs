//! Traits defining the seams between StudyHub crates.

pub mod blob;

pub use blob::{BlobRef, BlobStore};
