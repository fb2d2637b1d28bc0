//! In-process draft store for single-node deployments and tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{DraftMetadata, DraftRecord, InteractionState};
use crate::domain::repositories::{DraftStore, StoreResult};

/// Number of writes between sweeps of expired entries.
const SWEEP_INTERVAL: u64 = 64;

struct Entry {
    record: DraftRecord,
    expires_at: DateTime<Utc>,
}

impl Entry {
    fn is_live(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// A draft store kept in a process-local map.
///
/// Used when Redis is not configured or unreachable at startup. Drafts are
/// lost on restart and are not shared between instances. Expired entries are
/// skipped on read and swept every [`SWEEP_INTERVAL`] writes.
pub struct MemoryDraftStore {
    entries: RwLock<HashMap<(String, String), Entry>>,
    ttl: Duration,
    writes: AtomicU64,
    fallback: bool,
}

impl MemoryDraftStore {
    /// Creates an empty store whose entries live for `ttl_seconds`.
    pub fn new(ttl_seconds: u64) -> Self {
        debug!("Using MemoryDraftStore (drafts are process-local)");
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl: i64::try_from(ttl_seconds)
                .ok()
                .and_then(Duration::try_seconds)
                .unwrap_or(Duration::MAX),
            writes: AtomicU64::new(0),
            fallback: false,
        }
    }

    /// Creates a store standing in for an unreachable configured backend.
    ///
    /// Reported as degraded by the health endpoint.
    pub fn fallback(ttl_seconds: u64) -> Self {
        Self {
            fallback: true,
            ..Self::new(ttl_seconds)
        }
    }

    fn entry_key(namespace: &str, key: &str) -> (String, String) {
        (namespace.to_string(), key.to_string())
    }

    async fn live_record(&self, namespace: &str, key: &str) -> Option<DraftRecord> {
        let now = Utc::now();
        let entries = self.entries.read().await;
        entries
            .get(&Self::entry_key(namespace, key))
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.record.clone())
    }
}

impl Default for MemoryDraftStore {
    fn default() -> Self {
        Self::new(604_800)
    }
}

#[async_trait]
impl DraftStore for MemoryDraftStore {
    async fn get(&self, namespace: &str, key: &str) -> StoreResult<Option<InteractionState>> {
        Ok(self
            .live_record(namespace, key)
            .await
            .map(|record| record.state))
    }

    async fn get_metadata(
        &self,
        namespace: &str,
        key: &str,
    ) -> StoreResult<Option<DraftMetadata>> {
        Ok(self
            .live_record(namespace, key)
            .await
            .map(|record| record.metadata))
    }

    async fn set(
        &self,
        namespace: &str,
        key: &str,
        state: InteractionState,
        owner: Option<String>,
    ) -> StoreResult<()> {
        let metadata = DraftMetadata::new(owner);
        let expires_at = metadata
            .updated_at
            .checked_add_signed(self.ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let mut entries = self.entries.write().await;
        if self.writes.fetch_add(1, Ordering::Relaxed) % SWEEP_INTERVAL == SWEEP_INTERVAL - 1 {
            let now = Utc::now();
            let before = entries.len();
            entries.retain(|_, entry| entry.is_live(now));
            debug!(swept = before - entries.len(), "Draft store sweep");
        }
        entries.insert(
            Self::entry_key(namespace, key),
            Entry {
                record: DraftRecord { state, metadata },
                expires_at,
            },
        );

        debug!(namespace, key, "Draft store SET");
        Ok(())
    }

    async fn delete(&self, namespace: &str, key: &str) -> StoreResult<bool> {
        let now = Utc::now();
        let removed = self
            .entries
            .write()
            .await
            .remove(&Self::entry_key(namespace, key));

        Ok(removed.is_some_and(|entry| entry.is_live(now)))
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn is_fallback(&self) -> bool {
        self.fallback
    }
}
