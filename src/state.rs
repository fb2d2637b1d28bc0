//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::converters::{
    ConverterRegistry, DRAFT_PREVIEW_NAMESPACE, DraftResolver, ViewModeConverter,
};
use crate::application::services::PreviewService;
use crate::domain::entities::RouteInfo;
use crate::domain::repositories::{DraftStore, NamespacedStore};
use crate::routes::preview_route;

#[derive(Clone)]
pub struct AppState {
    pub preview_service: Arc<PreviewService>,
    pub converters: Arc<ConverterRegistry>,
    /// Preview route definition with converters already bound.
    pub preview_route: Arc<RouteInfo>,
    pub store: Arc<dyn DraftStore>,
    /// View mode used in preview URLs when a request names none.
    pub default_view_mode: Option<String>,
}

impl AppState {
    /// Wires services and converters over `store`.
    ///
    /// `view_modes` are the view modes accepted in preview URLs.
    pub fn new(store: Arc<dyn DraftStore>, view_modes: Vec<String>) -> Self {
        let previews = NamespacedStore::new(store.clone(), DRAFT_PREVIEW_NAMESPACE);

        let view_mode = ViewModeConverter::new(view_modes);
        let default_view_mode = view_mode.default_view_mode().map(str::to_string);

        let mut converters = ConverterRegistry::new();
        converters.add(Arc::new(DraftResolver::new(previews.clone())), 0);
        converters.add(Arc::new(view_mode), 0);

        let mut route = preview_route();
        converters.bind_route(&mut route);

        Self {
            preview_service: Arc::new(PreviewService::new(previews)),
            converters: Arc::new(converters),
            preview_route: Arc::new(route),
            store,
            default_view_mode,
        }
    }
}
