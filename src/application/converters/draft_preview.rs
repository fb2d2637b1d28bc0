//! Resolver for `draft_preview` route parameters.

use std::sync::Arc;

use async_trait::async_trait;
use metrics::counter;
use tracing::{debug, error, warn};

use super::converter::RouteParameterConverter;
use crate::domain::entities::{NodeDraft, ParamDefinition, RouteDefaults, RouteInfo, Upcast};
use crate::domain::repositories::NamespacedStore;

/// Reserved type tag selecting the draft resolver.
pub const DRAFT_PREVIEW_TYPE: &str = "draft_preview";

/// Draft store namespace that holds preview interaction state.
pub const DRAFT_PREVIEW_NAMESPACE: &str = "draft_preview";

/// Outcome of a draft lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftLookup {
    /// No interaction state is stored under the token.
    Missing,
    /// State exists but carries no entity.
    Empty,
    /// The entity held by the stored state.
    Found(Arc<NodeDraft>),
}

impl DraftLookup {
    fn outcome(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Empty => "empty",
            Self::Found(_) => "found",
        }
    }

    /// Collapses both absence causes into `None`.
    pub fn into_entity(self) -> Option<Arc<NodeDraft>> {
        match self {
            Self::Found(entity) => Some(entity),
            Self::Missing | Self::Empty => None,
        }
    }
}

/// Upcasts a preview token into the unsaved node it refers to.
///
/// Read-only: the resolver never creates, deletes, or mutates store entries,
/// so repeated calls with the same token return the same entity.
pub struct DraftResolver {
    store: NamespacedStore,
}

impl DraftResolver {
    /// Creates a resolver over a store handle bound to
    /// [`DRAFT_PREVIEW_NAMESPACE`].
    pub fn new(store: NamespacedStore) -> Self {
        Self { store }
    }

    /// Looks up `token`, keeping the reason for an absent draft.
    ///
    /// Store failures are logged and reported as [`DraftLookup::Missing`].
    pub async fn lookup(&self, token: &str) -> DraftLookup {
        let lookup = match self.store.get(token).await {
            Ok(Some(state)) => match state.entity() {
                Some(entity) => DraftLookup::Found(entity),
                None => {
                    warn!(
                        token,
                        form_id = %state.form_id,
                        "Draft state has no entity"
                    );
                    DraftLookup::Empty
                }
            },
            Ok(None) => {
                debug!(token, "No draft stored for token");
                DraftLookup::Missing
            }
            Err(e) => {
                error!(token, "Draft lookup failed: {}", e);
                DraftLookup::Missing
            }
        };

        counter!("draft_preview_lookups_total", "outcome" => lookup.outcome()).increment(1);
        lookup
    }
}

#[async_trait]
impl RouteParameterConverter for DraftResolver {
    fn id(&self) -> &'static str {
        DRAFT_PREVIEW_TYPE
    }

    fn applies(&self, definition: &ParamDefinition, _name: &str, _route: &RouteInfo) -> bool {
        definition.type_tag() == Some(DRAFT_PREVIEW_TYPE)
    }

    async fn resolve(
        &self,
        value: &str,
        _definition: &ParamDefinition,
        _name: &str,
        _defaults: &RouteDefaults,
    ) -> Option<Upcast> {
        self.lookup(value).await.into_entity().map(Upcast::Draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::InteractionState;
    use crate::domain::repositories::{DraftStore, MockDraftStore, StoreError};
    use crate::infrastructure::draft_store::MemoryDraftStore;
    use metrics_util::CompositeKey;
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use mockall::predicate::eq;

    fn route() -> RouteInfo {
        RouteInfo::new("entity.node.preview", "/preview/{node_preview}/{view_mode_id}")
    }

    fn resolver_over(store: Arc<dyn DraftStore>) -> DraftResolver {
        DraftResolver::new(NamespacedStore::new(store, DRAFT_PREVIEW_NAMESPACE))
    }

    #[test]
    fn test_applies_only_to_draft_preview_tag() {
        let resolver = resolver_over(Arc::new(MemoryDraftStore::new(60)));
        let route = route();

        assert!(resolver.applies(
            &ParamDefinition::typed("draft_preview"),
            "node_preview",
            &route
        ));
        assert!(!resolver.applies(&ParamDefinition::typed("node"), "node_preview", &route));
        assert!(!resolver.applies(&ParamDefinition::typed(""), "node_preview", &route));
        assert!(!resolver.applies(
            &ParamDefinition::typed("Draft_Preview"),
            "node_preview",
            &route
        ));
        assert!(!resolver.applies(&ParamDefinition::untyped(), "node_preview", &route));
    }

    #[tokio::test]
    async fn test_resolve_returns_stored_entity() {
        let store = Arc::new(MemoryDraftStore::new(60));
        let state = InteractionState::new(NodeDraft::new("article", "E"));
        let entity = state.entity().unwrap();
        store
            .set(DRAFT_PREVIEW_NAMESPACE, "tok-1", state, None)
            .await
            .unwrap();
        let resolver = resolver_over(store);

        let resolved = resolver
            .resolve(
                "tok-1",
                &ParamDefinition::typed("draft_preview"),
                "node_preview",
                &RouteDefaults::new(),
            )
            .await
            .unwrap();

        let draft = resolved.as_draft().unwrap();
        assert!(Arc::ptr_eq(draft, &entity));
        assert_eq!(draft.title, "E");
    }

    #[tokio::test]
    async fn test_resolve_missing_token_is_none() {
        let resolver = resolver_over(Arc::new(MemoryDraftStore::new(60)));

        let resolved = resolver
            .resolve(
                "tok-404",
                &ParamDefinition::typed("draft_preview"),
                "node_preview",
                &RouteDefaults::new(),
            )
            .await;

        assert!(resolved.is_none());
    }

    #[tokio::test]
    async fn test_resolve_is_idempotent() {
        let store = Arc::new(MemoryDraftStore::new(60));
        store
            .set(
                DRAFT_PREVIEW_NAMESPACE,
                "tok-1",
                InteractionState::new(NodeDraft::new("page", "Twice")),
                None,
            )
            .await
            .unwrap();
        let resolver = resolver_over(store);
        let def = ParamDefinition::typed("draft_preview");
        let defaults = RouteDefaults::new();

        let first = resolver.resolve("tok-1", &def, "node_preview", &defaults).await;
        let second = resolver.resolve("tok-1", &def, "node_preview", &defaults).await;

        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_resolve_reads_only_its_namespace() {
        let mut mock = MockDraftStore::new();
        mock.expect_get()
            .with(eq(DRAFT_PREVIEW_NAMESPACE), eq("tok-1"))
            .times(1)
            .returning(|_, _| Ok(None));
        mock.expect_set().times(0);
        mock.expect_delete().times(0);

        let resolver = resolver_over(Arc::new(mock));
        let resolved = resolver
            .resolve(
                "tok-1",
                &ParamDefinition::typed("draft_preview"),
                "node_preview",
                &RouteDefaults::new(),
            )
            .await;

        assert!(resolved.is_none());
    }

    #[tokio::test]
    async fn test_lookup_distinguishes_empty_state() {
        let mut mock = MockDraftStore::new();
        mock.expect_get()
            .returning(|_, _| Ok(Some(InteractionState::without_entity("node_page_form"))));

        let resolver = resolver_over(Arc::new(mock));

        assert_eq!(resolver.lookup("tok-1").await, DraftLookup::Empty);
        assert!(
            resolver
                .resolve(
                    "tok-1",
                    &ParamDefinition::typed("draft_preview"),
                    "node_preview",
                    &RouteDefaults::new(),
                )
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_store_failure_is_absence() {
        let mut mock = MockDraftStore::new();
        mock.expect_get()
            .returning(|_, _| Err(StoreError::ConnectionError("down".to_string())));

        let resolver = resolver_over(Arc::new(mock));

        assert_eq!(resolver.lookup("tok-1").await, DraftLookup::Missing);
    }

    fn lookups_counted(snapshot: &[(CompositeKey, DebugValue)], outcome: &str) -> u64 {
        snapshot
            .iter()
            .find_map(|(key, value)| {
                let key = key.key();
                let matches = key.name() == "draft_preview_lookups_total"
                    && key
                        .labels()
                        .any(|label| label.key() == "outcome" && label.value() == outcome);
                match (matches, value) {
                    (true, DebugValue::Counter(count)) => Some(*count),
                    _ => None,
                }
            })
            .unwrap_or(0)
    }

    #[test]
    fn test_lookup_counts_each_outcome() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();
            runtime.block_on(async {
                let mut mock = MockDraftStore::new();
                mock.expect_get()
                    .with(eq(DRAFT_PREVIEW_NAMESPACE), eq("tok-1"))
                    .returning(|_, _| {
                        Ok(Some(InteractionState::new(NodeDraft::new("page", "Found"))))
                    });
                mock.expect_get()
                    .with(eq(DRAFT_PREVIEW_NAMESPACE), eq("tok-empty"))
                    .returning(|_, _| {
                        Ok(Some(InteractionState::without_entity("node_page_form")))
                    });
                mock.expect_get()
                    .with(eq(DRAFT_PREVIEW_NAMESPACE), eq("tok-404"))
                    .returning(|_, _| Ok(None));
                mock.expect_get()
                    .with(eq(DRAFT_PREVIEW_NAMESPACE), eq("tok-down"))
                    .returning(|_, _| Err(StoreError::ConnectionError("down".to_string())));
                let resolver = resolver_over(Arc::new(mock));

                resolver.lookup("tok-1").await;
                resolver.lookup("tok-1").await;
                resolver.lookup("tok-empty").await;
                resolver.lookup("tok-404").await;
                resolver.lookup("tok-down").await;
            });
        });

        let snapshot: Vec<_> = snapshotter
            .snapshot()
            .into_vec()
            .into_iter()
            .map(|(key, _, _, value)| (key, value))
            .collect();
        assert_eq!(lookups_counted(&snapshot, "found"), 2);
        assert_eq!(lookups_counted(&snapshot, "empty"), 1);
        assert_eq!(lookups_counted(&snapshot, "missing"), 2);
    }
}
