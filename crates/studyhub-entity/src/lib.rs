//! # studyhub-entity
//!
//! Entity models shared by the database, service, and API crates.

pub mod resource;
pub mod subtopic;
pub mod topic;
pub mod user;

pub use resource::{CreateResource, Resource};
pub use subtopic::{CreateSubtopic, Subtopic};
pub use topic::{CreateTopic, Topic};
pub use user::{CreateUser, User};
