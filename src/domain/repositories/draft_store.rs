//! Session draft store trait, errors, and the namespaced handle.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::{DraftMetadata, InteractionState};

/// Errors that can occur while talking to a draft store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Draft store connection error: {0}")]
    ConnectionError(String),

    #[error("Draft store operation error: {0}")]
    OperationError(String),

    #[error("Draft store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for draft store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Temporary, session-scoped storage of form interaction state.
///
/// Entries are addressed by `(namespace, key)` and expire after a
/// backend-specific TTL.
///
/// # Implementations
///
/// - [`crate::infrastructure::draft_store::RedisDraftStore`] - Redis-backed, fail-open
/// - [`crate::infrastructure::draft_store::MemoryDraftStore`] - Single-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DraftStore: Send + Sync {
    /// Retrieves the state stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(state))` if an unexpired entry exists
    /// - `Ok(None)` otherwise
    async fn get(&self, namespace: &str, key: &str) -> StoreResult<Option<InteractionState>>;

    /// Retrieves owner and timestamp of the entry under `key`.
    async fn get_metadata(&self, namespace: &str, key: &str)
    -> StoreResult<Option<DraftMetadata>>;

    /// Stores `state` under `key`, replacing any previous entry.
    async fn set(
        &self,
        namespace: &str,
        key: &str,
        state: InteractionState,
        owner: Option<String>,
    ) -> StoreResult<()>;

    /// Removes the entry under `key`.
    ///
    /// Returns `Ok(true)` if an entry was removed.
    async fn delete(&self, namespace: &str, key: &str) -> StoreResult<bool>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;

    /// Returns whether this store stands in for a backend that could not be
    /// reached at startup.
    fn is_fallback(&self) -> bool {
        false
    }
}

/// A draft store handle bound to a single namespace.
///
/// Consumers receive this at construction time instead of looking the
/// namespace up on every call.
#[derive(Clone)]
pub struct NamespacedStore {
    store: Arc<dyn DraftStore>,
    namespace: String,
}

impl NamespacedStore {
    pub fn new(store: Arc<dyn DraftStore>, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub async fn get(&self, key: &str) -> StoreResult<Option<InteractionState>> {
        self.store.get(&self.namespace, key).await
    }

    pub async fn get_metadata(&self, key: &str) -> StoreResult<Option<DraftMetadata>> {
        self.store.get_metadata(&self.namespace, key).await
    }

    pub async fn set(
        &self,
        key: &str,
        state: InteractionState,
        owner: Option<String>,
    ) -> StoreResult<()> {
        self.store.set(&self.namespace, key, state, owner).await
    }

    pub async fn delete(&self, key: &str) -> StoreResult<bool> {
        self.store.delete(&self.namespace, key).await
    }
}
