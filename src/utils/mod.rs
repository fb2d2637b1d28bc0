//! Utility functions.
//!
//! - [`token`] - Preview token generation

pub mod token;
