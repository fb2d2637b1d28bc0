//! Typed values produced by route parameter converters.

use std::sync::Arc;

use super::node::NodeDraft;

/// A route parameter after conversion from its raw path segment.
#[derive(Debug, Clone, PartialEq)]
pub enum Upcast {
    /// A node draft resolved from the draft store.
    Draft(Arc<NodeDraft>),
    /// A validated view mode machine name.
    ViewMode(String),
}

impl Upcast {
    pub fn as_draft(&self) -> Option<&Arc<NodeDraft>> {
        match self {
            Self::Draft(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn as_view_mode(&self) -> Option<&str> {
        match self {
            Self::ViewMode(mode) => Some(mode),
            _ => None,
        }
    }
}
