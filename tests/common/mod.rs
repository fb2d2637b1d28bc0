#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use draft_preview::application::converters::DRAFT_PREVIEW_NAMESPACE;
use draft_preview::domain::entities::{DraftMetadata, InteractionState, NodeDraft};
use draft_preview::domain::repositories::{DraftStore, StoreError, StoreResult};
use draft_preview::infrastructure::draft_store::MemoryDraftStore;
use draft_preview::routes::build_router;
use draft_preview::state::AppState;

pub fn view_modes() -> Vec<String> {
    vec!["full".to_string(), "teaser".to_string()]
}

pub fn create_test_state(store: Arc<dyn DraftStore>) -> AppState {
    AppState::new(store, view_modes())
}

/// Test server over a fresh in-memory store, plus a handle to that store.
pub fn create_test_server() -> (TestServer, Arc<MemoryDraftStore>) {
    let store = Arc::new(MemoryDraftStore::new(3600));
    let server = TestServer::new(build_router(create_test_state(store.clone()))).unwrap();
    (server, store)
}

pub async fn seed_draft(store: &MemoryDraftStore, token: &str, draft: NodeDraft) {
    store
        .set(
            DRAFT_PREVIEW_NAMESPACE,
            token,
            InteractionState::new(draft),
            None,
        )
        .await
        .unwrap();
}

/// A store whose backend is unreachable.
pub struct UnreachableStore;

#[async_trait]
impl DraftStore for UnreachableStore {
    async fn get(&self, _namespace: &str, _key: &str) -> StoreResult<Option<InteractionState>> {
        Err(StoreError::ConnectionError("unreachable".to_string()))
    }

    async fn get_metadata(
        &self,
        _namespace: &str,
        _key: &str,
    ) -> StoreResult<Option<DraftMetadata>> {
        Err(StoreError::ConnectionError("unreachable".to_string()))
    }

    async fn set(
        &self,
        _namespace: &str,
        _key: &str,
        _state: InteractionState,
        _owner: Option<String>,
    ) -> StoreResult<()> {
        Err(StoreError::ConnectionError("unreachable".to_string()))
    }

    async fn delete(&self, _namespace: &str, _key: &str) -> StoreResult<bool> {
        Err(StoreError::ConnectionError("unreachable".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}
