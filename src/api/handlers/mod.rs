//! HTTP request handlers for API endpoints.

pub mod health;
pub mod preview;

pub use health::health_handler;
pub use preview::{
    create_preview_handler, delete_preview_handler, preview_metadata_handler,
    show_preview_handler,
};
