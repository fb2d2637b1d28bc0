//! API route configuration.

use crate::api::handlers::{
    create_preview_handler, delete_preview_handler, preview_metadata_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Preview management routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST   /previews`         - Store a draft and get its preview token
/// - `GET    /previews/{token}` - Owner and last update of a stored draft
/// - `DELETE /previews/{token}` - Discard a stored draft
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/previews", post(create_preview_handler))
        .route(
            "/previews/{token}",
            get(preview_metadata_handler).delete(delete_preview_handler),
        )
}
