//! Application layer: route parameter conversion and preview services.
//!
//! # Modules
//!
//! - [`converters`] - Upcasting of raw path segments (drafts, view modes)
//! - [`services`] - Preview creation, inspection, and removal

pub mod converters;
pub mod services;
