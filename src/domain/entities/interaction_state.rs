//! Interaction state captured from a form submission cycle.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::node::NodeDraft;

/// Saved state of an editing form, kept in the draft store between requests.
///
/// The entity is held behind an [`Arc`] so readers share the stored instance
/// instead of copying it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionState {
    pub form_id: String,
    entity: Option<Arc<NodeDraft>>,
}

impl InteractionState {
    /// Wraps a draft produced by its edit form.
    pub fn new(entity: NodeDraft) -> Self {
        Self {
            form_id: entity.form_id(),
            entity: Some(Arc::new(entity)),
        }
    }

    /// Creates a state that carries no entity.
    ///
    /// Happens when a form cycle was stored before an entity was built.
    pub fn without_entity(form_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            entity: None,
        }
    }

    /// Returns the entity currently being edited.
    pub fn entity(&self) -> Option<Arc<NodeDraft>> {
        self.entity.clone()
    }
}

/// Bookkeeping stored next to an [`InteractionState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftMetadata {
    /// Session or user that owns the draft, if known.
    pub owner: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl DraftMetadata {
    pub fn new(owner: Option<String>) -> Self {
        Self {
            owner,
            updated_at: Utc::now(),
        }
    }
}

/// A stored draft: state plus metadata.
///
/// This is the unit the store backends serialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftRecord {
    pub state: InteractionState,
    pub metadata: DraftMetadata,
}
