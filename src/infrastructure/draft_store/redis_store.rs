//! Redis-backed draft store.

use crate::domain::entities::{DraftMetadata, DraftRecord, InteractionState};
use crate::domain::repositories::{DraftStore, StoreError, StoreResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

/// Redis draft store.
///
/// Entries are JSON-encoded [`DraftRecord`]s under `tempstore:{namespace}:{key}`
/// and expire via `SETEX`. Reads are fail-open: backend and decoding errors are
/// logged and reported as absence. Writes propagate errors, since a lost draft
/// must be surfaced to whoever tried to save it.
pub struct RedisDraftStore {
    client: ConnectionManager,
    ttl_seconds: u64,
    key_prefix: String,
}

impl RedisDraftStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `ttl_seconds` - Lifetime of stored drafts; controlled via `DRAFT_TTL_SECONDS`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ConnectionError`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, ttl_seconds: u64) -> StoreResult<Self> {
        info!("Connecting to Redis draft store");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            StoreError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis draft store");

        Ok(Self {
            client: manager,
            ttl_seconds,
            key_prefix: "tempstore".to_string(),
        })
    }

    fn build_key(&self, namespace: &str, key: &str) -> String {
        build_key(&self.key_prefix, namespace, key)
    }

    /// Fetches and decodes a record, treating any failure as a miss.
    async fn fetch_record(&self, namespace: &str, key: &str) -> Option<DraftRecord> {
        let redis_key = self.build_key(namespace, key);
        let mut conn = self.client.clone();

        let raw = match conn.get::<_, Option<String>>(&redis_key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(namespace, key, "Draft store MISS");
                return None;
            }
            Err(e) => {
                error!(namespace, key, "Redis GET error: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<DraftRecord>(&raw) {
            Ok(record) => {
                debug!(namespace, key, "Draft store HIT");
                Some(record)
            }
            Err(e) => {
                warn!(namespace, key, "Discarding undecodable draft record: {}", e);
                None
            }
        }
    }
}

fn build_key(prefix: &str, namespace: &str, key: &str) -> String {
    format!("{}:{}:{}", prefix, namespace, key)
}

#[async_trait]
impl DraftStore for RedisDraftStore {
    async fn get(&self, namespace: &str, key: &str) -> StoreResult<Option<InteractionState>> {
        Ok(self
            .fetch_record(namespace, key)
            .await
            .map(|record| record.state))
    }

    async fn get_metadata(
        &self,
        namespace: &str,
        key: &str,
    ) -> StoreResult<Option<DraftMetadata>> {
        Ok(self
            .fetch_record(namespace, key)
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
        let redis_key = self.build_key(namespace, key);
        let record = DraftRecord {
            state,
            metadata: DraftMetadata::new(owner),
        };
        let payload = serde_json::to_string(&record)?;
        let mut conn = self.client.clone();

        conn.set_ex::<_, _, ()>(&redis_key, payload, self.ttl_seconds)
            .await
            .map_err(|e| {
                warn!(namespace, key, "Redis SET error: {}", e);
                StoreError::OperationError(e.to_string())
            })?;

        debug!(
            namespace,
            key, "Draft store SET (TTL: {}s)", self.ttl_seconds
        );
        Ok(())
    }

    async fn delete(&self, namespace: &str, key: &str) -> StoreResult<bool> {
        let redis_key = self.build_key(namespace, key);
        let mut conn = self.client.clone();

        let deleted = conn.del::<_, i32>(&redis_key).await.map_err(|e| {
            warn!(namespace, key, "Redis DEL error: {}", e);
            StoreError::OperationError(e.to_string())
        })?;

        if deleted > 0 {
            debug!(namespace, key, "Draft store DELETE");
        }
        Ok(deleted > 0)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_layout() {
        assert_eq!(
            build_key("tempstore", "draft_preview", "tok-1"),
            "tempstore:draft_preview:tok-1"
        );
    }

    #[tokio::test]
    async fn test_connect_rejects_invalid_url() {
        let result = RedisDraftStore::connect("not-a-redis-url", 60).await;
        assert!(matches!(result, Err(StoreError::ConnectionError(_))));
    }
}
