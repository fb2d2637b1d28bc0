//! Route parameter converter capability.

use async_trait::async_trait;

use crate::domain::entities::{ParamDefinition, RouteDefaults, RouteInfo, Upcast};

/// Upcasts a raw path segment into a typed value before handler invocation.
///
/// The routing layer asks every registered converter whether it
/// [`applies`](Self::applies) to a parameter while the route table is built,
/// then calls [`resolve`](Self::resolve) on the chosen one for each request.
///
/// # Implementations
///
/// - [`super::DraftResolver`] - `draft_preview` tokens to node drafts
/// - [`super::ViewModeConverter`] - `view_mode` machine names
#[async_trait]
pub trait RouteParameterConverter: Send + Sync {
    /// Registry key of this converter.
    fn id(&self) -> &'static str;

    /// Returns true if this converter handles the given parameter.
    ///
    /// Must be pure and cheap.
    fn applies(&self, definition: &ParamDefinition, name: &str, route: &RouteInfo) -> bool;

    /// Converts `value` into its typed form.
    ///
    /// Returns `None` when nothing matches `value`. Absence is a normal
    /// outcome, never an error.
    async fn resolve(
        &self,
        value: &str,
        definition: &ParamDefinition,
        name: &str,
        defaults: &RouteDefaults,
    ) -> Option<Upcast>;
}
