//! Search tools exposed over MCP

mod local_search;
mod web_search;

pub use local_search::LocalSearchTool;
pub use web_search::WebSearchTool;

use async_trait::async_trait;
use brave_search_core::{validate_arguments, CoreError, CoreResult, ToolDefinition};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

/// A callable tool: a static definition plus an async body producing text
#[async_trait]
pub trait ToolHandler: Send + Sync {
    fn definition(&self) -> &ToolDefinition;

    /// Validate `arguments` and run the tool. Any failure is returned, never raised.
    async fn call(&self, arguments: Option<&JsonValue>) -> CoreResult<String>;
}

/// Validate raw arguments against `definition` and decode them into typed parameters
pub(crate) fn typed_arguments<T: DeserializeOwned>(
    definition: &ToolDefinition,
    arguments: Option<&JsonValue>,
) -> CoreResult<T> {
    let normalized = validate_arguments(definition, arguments)
        .map_err(|e| CoreError::invalid_arguments(&definition.name, e.to_string()))?;
    serde_json::from_value(JsonValue::Object(normalized))
        .map_err(|e| CoreError::invalid_arguments(&definition.name, e.to_string()))
}
