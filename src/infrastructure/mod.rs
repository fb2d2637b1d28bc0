//! Infrastructure layer for external integrations.
//!
//! Provides the concrete [`crate::domain::repositories::DraftStore`] backends.
//!
//! # Modules
//!
//! - [`draft_store`] - Redis and in-memory draft storage

pub mod draft_store;
