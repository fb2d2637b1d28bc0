//! Handlers for storing, rendering, and discarding previews.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::preview::{
    CreatePreviewRequest, CreatePreviewResponse, NodeView, PreviewMetadataResponse,
    PreviewResponse,
};
use crate::application::converters::VIEW_MODE_TYPE;
use crate::domain::entities::{ParamDefinition, RouteDefaults};
use crate::error::AppError;
use crate::routes::preview_url;
use crate::state::AppState;

/// Stores a draft and returns the token that previews it.
///
/// # Endpoint
///
/// `POST /api/previews`
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or the view mode is unknown.
pub async fn create_preview_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreatePreviewRequest>,
) -> Result<(StatusCode, Json<CreatePreviewResponse>), AppError> {
    payload.validate().map_err(|e| {
        AppError::bad_request("Invalid preview request", json!({ "errors": e }))
    })?;

    let Some(view_mode) = payload
        .view_mode
        .clone()
        .or_else(|| state.default_view_mode.clone())
    else {
        return Err(AppError::internal(
            "No preview view modes configured",
            json!({}),
        ));
    };
    if !accepts_view_mode(&state, &view_mode).await {
        return Err(AppError::bad_request(
            "Unknown view mode",
            json!({ "view_mode": view_mode }),
        ));
    }

    let owner = payload.author.clone();
    let token = state
        .preview_service
        .create_preview(payload.into_draft(), owner)
        .await?;

    let preview_url = preview_url(&token, &view_mode);
    Ok((
        StatusCode::CREATED,
        Json(CreatePreviewResponse { token, preview_url }),
    ))
}

/// Renders a stored draft.
///
/// # Endpoint
///
/// `GET /preview/{node_preview}/{view_mode_id}`
///
/// Both segments are upcast by the converter registry before the draft is
/// rendered: `node_preview` through the draft resolver and `view_mode_id`
/// through the view mode converter.
///
/// # Errors
///
/// Returns 404 Not Found if no draft is stored under the token or the view
/// mode is unknown.
pub async fn show_preview_handler(
    State(state): State<AppState>,
    Path(raw): Path<HashMap<String, String>>,
) -> Result<Json<PreviewResponse>, AppError> {
    let params = state.converters.convert(&state.preview_route, &raw).await?;

    let (Some(draft), Some(view_mode)) = (
        params.draft("node_preview"),
        params.view_mode("view_mode_id"),
    ) else {
        return Err(AppError::internal(
            "Preview route parameters were not upcast",
            json!({ "route": state.preview_route.name }),
        ));
    };

    Ok(Json(PreviewResponse {
        token: raw.get("node_preview").cloned().unwrap_or_default(),
        view_mode: view_mode.to_string(),
        node: NodeView::from(draft.as_ref()),
    }))
}

/// Returns owner and last update of a stored draft.
///
/// # Endpoint
///
/// `GET /api/previews/{token}`
pub async fn preview_metadata_handler(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<PreviewMetadataResponse>, AppError> {
    let metadata = state.preview_service.metadata(&token).await?;
    Ok(Json(PreviewMetadataResponse::new(token, metadata)))
}

/// Discards a stored draft.
///
/// # Endpoint
///
/// `DELETE /api/previews/{token}`
///
/// # Response Codes
///
/// - **204 No Content**: Draft removed
/// - **404 Not Found**: Nothing stored under the token
pub async fn delete_preview_handler(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<StatusCode, AppError> {
    state.preview_service.discard_preview(&token).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Checks a view mode against the converter that guards preview URLs.
async fn accepts_view_mode(state: &AppState, view_mode: &str) -> bool {
    let Some(converter) = state.converters.get(VIEW_MODE_TYPE) else {
        return false;
    };

    converter
        .resolve(
            view_mode,
            &ParamDefinition::typed(VIEW_MODE_TYPE),
            "view_mode_id",
            &RouteDefaults::new(),
        )
        .await
        .is_some()
}
