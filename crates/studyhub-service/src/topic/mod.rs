//! Topic listing, creation, search, and cascading deletion.

pub mod service;

pub use service::TopicService;
