//! Core domain entities for draft previews.
//!
//! # Entity Types
//!
//! - [`NodeDraft`] - An unsaved content item
//! - [`InteractionState`] - Saved form state holding the draft being edited
//! - [`DraftMetadata`] / [`DraftRecord`] - Store bookkeeping around a state
//! - [`ParamDefinition`] / [`RouteInfo`] - Routing metadata read by converters
//! - [`Upcast`] - Typed result of a parameter conversion

pub mod interaction_state;
pub mod node;
pub mod route;
pub mod upcast;

pub use interaction_state::{DraftMetadata, DraftRecord, InteractionState};
pub use node::NodeDraft;
pub use route::{ParamDefinition, RouteDefaults, RouteInfo};
pub use upcast::Upcast;
