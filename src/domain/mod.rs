//! Domain layer containing draft and routing entities plus store contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Node drafts, interaction state, route metadata, upcast values
//! - [`repositories`] - The [`repositories::DraftStore`] collaborator trait
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//!
//! # Preview Flow
//!
//! 1. An edit form stores its [`entities::InteractionState`] under a fresh token
//! 2. The preview URL embeds that token as a path segment
//! 3. A route parameter converter upcasts the token back into the
//!    [`entities::NodeDraft`] before the handler runs

pub mod entities;
pub mod repositories;
