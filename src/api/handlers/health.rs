//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Draft store reachable, possibly the in-memory fallback
/// - **503 Service Unavailable**: Draft store unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "draft_store": { "status": "ok", "message": "Draft store reachable" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_draft_store(&state).await;
    let healthy = store_check.status != "error";

    let response = HealthResponse {
        status: if store_check.status == "ok" {
            "healthy"
        } else {
            "degraded"
        }
        .to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            draft_store: store_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_draft_store(state: &AppState) -> CheckStatus {
    if state.store.is_fallback() {
        CheckStatus {
            status: "degraded".to_string(),
            message: Some(
                "Redis unreachable at startup, drafts are process-local".to_string(),
            ),
        }
    } else if state.store.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Draft store reachable".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Draft store unreachable".to_string()),
        }
    }
}
