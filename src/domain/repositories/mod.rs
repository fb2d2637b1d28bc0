//! Collaborator trait definitions for the domain layer.
//!
//! Traits define the contract; implementations live in
//! `crate::infrastructure::draft_store`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod draft_store;

pub use draft_store::{DraftStore, NamespacedStore, StoreError, StoreResult};

#[cfg(test)]
pub use draft_store::MockDraftStore;
