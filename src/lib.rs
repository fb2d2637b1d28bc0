//! # Draft Preview
//!
//! Session-scoped draft previews: editors store an unsaved content item under
//! an opaque token, and the preview URL upcasts that token back into the draft.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Draft and route entities, the draft store trait
//! - **Application Layer** ([`application`]) - Route parameter converters and preview service
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory draft stores
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Route Parameter Conversion
//!
//! Every route parameter may carry a type tag. At startup the
//! [`application::converters::ConverterRegistry`] binds each tagged parameter
//! to the converter that [`applies`](application::converters::RouteParameterConverter::applies)
//! to it. On each request the registry resolves the raw path segments; a
//! converter that finds nothing turns the request into a 404.
//!
//! The `draft_preview` tag is handled by
//! [`application::converters::DraftResolver`], which reads the draft store
//! under the `draft_preview` namespace and never writes to it.
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"  # Optional, in-memory otherwise
//! cargo run
//! ```
//!
//! Configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::converters::{
        ConverterRegistry, DraftLookup, DraftResolver, RouteParameterConverter,
    };
    pub use crate::application::services::PreviewService;
    pub use crate::domain::entities::{InteractionState, NodeDraft, ParamDefinition, RouteInfo};
    pub use crate::domain::repositories::{DraftStore, NamespacedStore};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
