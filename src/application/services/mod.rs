//! Business logic services for the application layer.

pub mod preview_service;

pub use preview_service::PreviewService;
