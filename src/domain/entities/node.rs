//! Node draft entity representing an unsaved content item under preview.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An in-progress content item captured from an editing session.
///
/// `nid` stays `None` until the node has been saved at least once; previews
/// of brand new content are the common case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDraft {
    pub nid: Option<i64>,
    pub bundle: String,
    pub title: String,
    pub body: Option<String>,
    pub langcode: String,
    pub published: bool,
    pub author: Option<String>,
    pub changed_at: DateTime<Utc>,
}

impl NodeDraft {
    /// Creates an unsaved, unpublished draft in the default language.
    pub fn new(bundle: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            nid: None,
            bundle: bundle.into(),
            title: title.into(),
            body: None,
            langcode: "en".to_string(),
            published: false,
            author: None,
            changed_at: Utc::now(),
        }
    }

    /// Returns true if the draft has never been saved.
    pub fn is_new(&self) -> bool {
        self.nid.is_none()
    }

    /// Form id of the edit form that produced this draft.
    pub fn form_id(&self) -> String {
        format!("node_{}_form", self.bundle)
    }
}
