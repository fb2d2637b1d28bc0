//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /preview/{node_preview}/{view_mode_id}` - Render a stored draft
//! - `GET  /health`                                - Draft store health
//! - `/api/*`                                      - Preview management API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, show_preview_handler};
use crate::api::middleware::tracing;
use crate::application::converters::{DRAFT_PREVIEW_TYPE, VIEW_MODE_TYPE};
use crate::domain::entities::{ParamDefinition, RouteInfo};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Route name of the preview page.
pub const PREVIEW_ROUTE_NAME: &str = "entity.node.preview";

/// Path pattern of the preview page.
pub const PREVIEW_PATH: &str = "/preview/{node_preview}/{view_mode_id}";

/// Definition of the preview route and how its parameters are upcast.
pub fn preview_route() -> RouteInfo {
    RouteInfo::new(PREVIEW_ROUTE_NAME, PREVIEW_PATH)
        .with_parameter("node_preview", ParamDefinition::typed(DRAFT_PREVIEW_TYPE))
        .with_parameter("view_mode_id", ParamDefinition::typed(VIEW_MODE_TYPE))
}

/// Builds the preview URL for a token and view mode.
pub fn preview_url(token: &str, view_mode: &str) -> String {
    format!("/preview/{}/{}", token, view_mode)
}

/// Builds the routes with tracing, without path normalization.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(PREVIEW_PATH, get(show_preview_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_route_parameters() {
        let route = preview_route();

        assert_eq!(route.name, PREVIEW_ROUTE_NAME);
        assert_eq!(
            route.parameters["node_preview"].type_tag(),
            Some("draft_preview")
        );
        assert_eq!(
            route.parameters["view_mode_id"].type_tag(),
            Some("view_mode")
        );
    }

    #[test]
    fn test_preview_url() {
        assert_eq!(preview_url("abc", "full"), "/preview/abc/full");
    }

    #[tokio::test]
    async fn test_app_router_trims_trailing_slash() {
        use crate::infrastructure::draft_store::MemoryDraftStore;
        use axum::body::Body;
        use axum::http::{Request, StatusCode};
        use std::sync::Arc;
        use tower::ServiceExt;

        let state = AppState::new(
            Arc::new(MemoryDraftStore::new(60)),
            vec!["full".to_string()],
        );

        let response = app_router(state)
            .oneshot(Request::builder().uri("/health/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
