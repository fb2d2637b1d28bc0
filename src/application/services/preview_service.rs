//! Preview creation and lifecycle service.

use serde_json::json;
use tracing::info;

use crate::domain::entities::{DraftMetadata, InteractionState, NodeDraft};
use crate::domain::repositories::NamespacedStore;
use crate::error::AppError;
use crate::utils::token::generate_token;

/// Service that writes drafts into the preview namespace and manages them.
///
/// This is the producer side of the draft store. Reading drafts back for
/// rendering goes through [`crate::application::converters::DraftResolver`].
pub struct PreviewService {
    store: NamespacedStore,
}

impl PreviewService {
    /// Creates a new preview service over the preview namespace handle.
    pub fn new(store: NamespacedStore) -> Self {
        Self { store }
    }

    /// Stores `draft` under a fresh token and returns the token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if token generation or the store write fails.
    pub async fn create_preview(
        &self,
        draft: NodeDraft,
        owner: Option<String>,
    ) -> Result<String, AppError> {
        let token = generate_token().map_err(|e| {
            AppError::internal(
                "Failed to generate preview token",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let bundle = draft.bundle.clone();
        self.store
            .set(&token, InteractionState::new(draft), owner)
            .await?;

        info!(token = %token, bundle = %bundle, "Preview draft stored");
        Ok(token)
    }

    /// Returns owner and timestamp of a stored preview.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no preview is stored under `token`.
    pub async fn metadata(&self, token: &str) -> Result<DraftMetadata, AppError> {
        self.store
            .get_metadata(token)
            .await?
            .ok_or_else(|| preview_not_found(token))
    }

    /// Removes a stored preview.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if nothing was stored under `token`.
    pub async fn discard_preview(&self, token: &str) -> Result<(), AppError> {
        if self.store.delete(token).await? {
            info!(token, "Preview draft discarded");
            Ok(())
        } else {
            Err(preview_not_found(token))
        }
    }
}

fn preview_not_found(token: &str) -> AppError {
    AppError::not_found("Preview not found", json!({ "token": token }))
}
