//! Registry that binds converters to routes and upcasts matched parameters.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use super::converter::RouteParameterConverter;
use crate::domain::entities::{NodeDraft, ParamDefinition, RouteDefaults, RouteInfo, Upcast};
use crate::error::AppError;

struct Registered {
    priority: i32,
    converter: Arc<dyn RouteParameterConverter>,
}

/// Converters keyed by id and ordered by priority.
///
/// # Lifecycle
///
/// 1. Converters are added at startup
/// 2. [`bind_route`](Self::bind_route) records the chosen converter id on each
///    route parameter while the route table is built
/// 3. [`convert`](Self::convert) upcasts raw segments for every request
#[derive(Default)]
pub struct ConverterRegistry {
    by_id: HashMap<&'static str, Registered>,
    order: Vec<&'static str>,
}

impl ConverterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a converter. Higher priority is consulted first; ties keep
    /// registration order. An existing converter with the same id is replaced.
    pub fn add(&mut self, converter: Arc<dyn RouteParameterConverter>, priority: i32) {
        let id = converter.id();
        self.order.retain(|existing| *existing != id);
        self.by_id.insert(
            id,
            Registered {
                priority,
                converter,
            },
        );

        let pos = self
            .order
            .iter()
            .position(|other| self.by_id[other].priority < priority)
            .unwrap_or(self.order.len());
        self.order.insert(pos, id);
    }

    /// Returns the converter registered under `id`.
    pub fn get(&self, id: &str) -> Option<&Arc<dyn RouteParameterConverter>> {
        self.by_id.get(id).map(|registered| &registered.converter)
    }

    /// Ids of the registered converters in the order they are consulted.
    pub fn ids(&self) -> &[&'static str] {
        &self.order
    }

    /// Returns the first converter, by priority, that applies to the parameter.
    pub fn converter_for(
        &self,
        definition: &ParamDefinition,
        name: &str,
        route: &RouteInfo,
    ) -> Option<&Arc<dyn RouteParameterConverter>> {
        self.order
            .iter()
            .map(|id| &self.by_id[id].converter)
            .find(|converter| converter.applies(definition, name, route))
    }

    /// Records the applicable converter on every unbound route parameter.
    ///
    /// Parameters that already name a converter are left untouched.
    pub fn bind_route(&self, route: &mut RouteInfo) {
        let snapshot = route.clone();

        for (name, definition) in route.parameters.iter_mut() {
            if definition.converter.is_some() {
                continue;
            }
            if let Some(converter) = self.converter_for(definition, name, &snapshot) {
                debug!(
                    route = %snapshot.name,
                    parameter = %name,
                    converter = converter.id(),
                    "Bound route parameter converter"
                );
                definition.converter = Some(converter.id().to_string());
            }
        }
    }

    /// Upcasts the raw parameters of a matched route.
    ///
    /// Parameters without a converter stay raw and are absent from the result.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if a converter finds nothing for its value.
    /// Returns [`AppError::Internal`] if a parameter is bound to an unregistered
    /// converter.
    pub async fn convert(
        &self,
        route: &RouteInfo,
        raw: &RouteDefaults,
    ) -> Result<ConvertedParams, AppError> {
        let mut converted = HashMap::new();

        for (name, definition) in &route.parameters {
            let Some(value) = raw.get(name) else {
                continue;
            };

            let converter = match &definition.converter {
                Some(id) => self.get(id).ok_or_else(|| {
                    AppError::internal(
                        "Route parameter bound to unknown converter",
                        json!({ "route": route.name, "parameter": name, "converter": id }),
                    )
                })?,
                None => match self.converter_for(definition, name, route) {
                    Some(converter) => converter,
                    None => continue,
                },
            };

            let upcast = converter
                .resolve(value, definition, name, raw)
                .await
                .ok_or_else(|| {
                    AppError::not_found(
                        "Route parameter could not be converted",
                        json!({ "route": route.name, "parameter": name }),
                    )
                })?;

            converted.insert(name.clone(), upcast);
        }

        Ok(ConvertedParams { values: converted })
    }
}

/// Upcast values of a matched route, keyed by parameter name.
#[derive(Debug, Clone, Default)]
pub struct ConvertedParams {
    values: HashMap<String, Upcast>,
}

impl ConvertedParams {
    pub fn get(&self, name: &str) -> Option<&Upcast> {
        self.values.get(name)
    }

    pub fn draft(&self, name: &str) -> Option<Arc<NodeDraft>> {
        self.get(name).and_then(Upcast::as_draft).cloned()
    }

    pub fn view_mode(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Upcast::as_view_mode)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
