//! DTOs for preview endpoints.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{DraftMetadata, NodeDraft};

/// Compiled regex for bundle machine names.
static BUNDLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").unwrap());

/// Request to store a draft for preview.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePreviewRequest {
    /// Content type machine name, e.g. `article`.
    #[validate(length(min = 1, max = 32))]
    #[validate(regex(path = *BUNDLE_REGEX, message = "Bundle must be a machine name"))]
    pub bundle: String,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    pub body: Option<String>,

    #[validate(length(min = 2, max = 12))]
    pub langcode: Option<String>,

    /// Set when previewing edits to already saved content.
    pub nid: Option<i64>,

    pub published: Option<bool>,

    pub author: Option<String>,

    /// View mode used in the returned preview URL (default: first of
    /// `PREVIEW_VIEW_MODES`).
    pub view_mode: Option<String>,
}

impl CreatePreviewRequest {
    /// Builds the draft entity described by this request.
    pub fn into_draft(self) -> NodeDraft {
        let mut draft = NodeDraft::new(self.bundle, self.title);
        draft.nid = self.nid;
        draft.body = self.body;
        if let Some(langcode) = self.langcode {
            draft.langcode = langcode;
        }
        draft.published = self.published.unwrap_or(false);
        draft.author = self.author;
        draft
    }
}

/// Token and URL of a newly stored preview.
#[derive(Debug, Serialize)]
pub struct CreatePreviewResponse {
    pub token: String,
    pub preview_url: String,
}

/// A rendered preview.
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub token: String,
    pub view_mode: String,
    pub node: NodeView,
}

/// JSON rendering of a node draft.
#[derive(Debug, Serialize)]
pub struct NodeView {
    pub nid: Option<i64>,
    pub is_new: bool,
    pub bundle: String,
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    pub langcode: String,
    pub published: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    pub changed_at: DateTime<Utc>,
}

impl From<&NodeDraft> for NodeView {
    fn from(draft: &NodeDraft) -> Self {
        Self {
            nid: draft.nid,
            is_new: draft.is_new(),
            bundle: draft.bundle.clone(),
            title: draft.title.clone(),
            body: draft.body.clone(),
            langcode: draft.langcode.clone(),
            published: draft.published,
            author: draft.author.clone(),
            changed_at: draft.changed_at,
        }
    }
}

/// Bookkeeping of a stored preview.
#[derive(Debug, Serialize)]
pub struct PreviewMetadataResponse {
    pub token: String,
    pub owner: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl PreviewMetadataResponse {
    pub fn new(token: String, metadata: DraftMetadata) -> Self {
        Self {
            token,
            owner: metadata.owner,
            updated_at: metadata.updated_at,
        }
    }
}
