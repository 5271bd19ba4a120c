//! Subtopic operations nested under topics.

pub mod service;

pub use service::SubtopicService;
