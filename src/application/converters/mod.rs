//! Route parameter converters.
//!
//! - [`RouteParameterConverter`] - The `applies`/`resolve` capability
//! - [`DraftResolver`] - `draft_preview` tokens to node drafts
//! - [`ViewModeConverter`] - `view_mode` machine names
//! - [`ConverterRegistry`] - Binds converters to routes and runs them

pub mod converter;
pub mod draft_preview;
pub mod registry;
pub mod view_mode;

pub use converter::RouteParameterConverter;
pub use draft_preview::{DRAFT_PREVIEW_NAMESPACE, DRAFT_PREVIEW_TYPE, DraftLookup, DraftResolver};
pub use registry::{ConvertedParams, ConverterRegistry};
pub use view_mode::{VIEW_MODE_TYPE, ViewModeConverter};
