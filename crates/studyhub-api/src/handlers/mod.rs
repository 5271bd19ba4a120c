//! HTTP handlers, one module per resource.

pub mod auth;
pub mod health;
pub mod resource;
pub mod subtopic;
pub mod tag;
pub mod topic;
