//! Draft store backends.
//!
//! Implements [`crate::domain::repositories::DraftStore`] twice:
//! - [`RedisDraftStore`] - Production Redis-backed store with TTL
//! - [`MemoryDraftStore`] - Process-local fallback, also used in tests

mod memory_store;
mod redis_store;

pub use memory_store::MemoryDraftStore;
pub use redis_store::RedisDraftStore;
