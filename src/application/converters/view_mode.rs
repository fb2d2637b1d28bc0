//! Converter for `view_mode` route parameters.

use async_trait::async_trait;

use super::converter::RouteParameterConverter;
use crate::domain::entities::{ParamDefinition, RouteDefaults, RouteInfo, Upcast};

/// Reserved type tag selecting the view mode converter.
pub const VIEW_MODE_TYPE: &str = "view_mode";

/// Accepts a path segment only if it names a configured view mode.
pub struct ViewModeConverter {
    view_modes: Vec<String>,
}

impl ViewModeConverter {
    pub fn new(view_modes: Vec<String>) -> Self {
        Self { view_modes }
    }

    /// First configured view mode, used when a caller names none.
    pub fn default_view_mode(&self) -> Option<&str> {
        self.view_modes.first().map(String::as_str)
    }
}

#[async_trait]
impl RouteParameterConverter for ViewModeConverter {
    fn id(&self) -> &'static str {
        VIEW_MODE_TYPE
    }

    fn applies(&self, definition: &ParamDefinition, _name: &str, _route: &RouteInfo) -> bool {
        definition.type_tag() == Some(VIEW_MODE_TYPE)
    }

    async fn resolve(
        &self,
        value: &str,
        _definition: &ParamDefinition,
        _name: &str,
        _defaults: &RouteDefaults,
    ) -> Option<Upcast> {
        self.view_modes
            .iter()
            .any(|mode| mode == value)
            .then(|| Upcast::ViewMode(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converter() -> ViewModeConverter {
        ViewModeConverter::new(vec!["full".to_string(), "teaser".to_string()])
    }

    #[tokio::test]
    async fn test_known_view_mode_resolves() {
        let resolved = converter()
            .resolve(
                "teaser",
                &ParamDefinition::typed(VIEW_MODE_TYPE),
                "view_mode_id",
                &RouteDefaults::new(),
            )
            .await;

        assert_eq!(resolved, Some(Upcast::ViewMode("teaser".to_string())));
    }

    #[tokio::test]
    async fn test_unknown_view_mode_is_none() {
        let resolved = converter()
            .resolve(
                "rss",
                &ParamDefinition::typed(VIEW_MODE_TYPE),
                "view_mode_id",
                &RouteDefaults::new(),
            )
            .await;

        assert!(resolved.is_none());
    }

    #[test]
    fn test_default_view_mode_is_first_configured() {
        assert_eq!(converter().default_view_mode(), Some("full"));
        assert_eq!(
            ViewModeConverter::new(vec!["teaser".to_string()]).default_view_mode(),
            Some("teaser")
        );
        assert_eq!(ViewModeConverter::new(Vec::new()).default_view_mode(), None);
    }

    #[test]
    fn test_applies_to_view_mode_tag() {
        let route = RouteInfo::new("r", "/r/{view_mode_id}");
        let converter = converter();

        assert!(converter.applies(&ParamDefinition::typed("view_mode"), "view_mode_id", &route));
        assert!(!converter.applies(
            &ParamDefinition::typed("draft_preview"),
            "view_mode_id",
            &route
        ));
    }
}
