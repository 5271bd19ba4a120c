//! # studyhub-database
//!
//! Persistence layer: the `*Store` trait seams, PostgreSQL repositories,
//! and an in-memory document store backend.
//!
//! Services depend on the traits in [`store`]; the [`provider`] module
//! selects and bootstraps the concrete backend from configuration.

pub mod memory;
pub mod provider;
pub mod repositories;
pub mod store;

pub use provider::StoreBackend;
