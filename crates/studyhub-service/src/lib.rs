//! # studyhub-service
//!
//! Domain services. Every operation takes a [`context::RequestContext`]
//! identifying the caller; nothing here reaches for global state.
//!
//! The [`ownership::OwnershipResolver`] is the single place where the
//! Topic → Subtopic → Resource chain is verified. Hierarchy services
//! resolve the chain first and only then touch the stores.

pub mod account;
pub mod context;
pub mod ownership;
pub mod resource;
pub mod subtopic;
pub mod topic;
