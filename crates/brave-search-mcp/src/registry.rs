//! Tool registry and call dispatch

use brave_search_connectors::SearchBackend;
use brave_search_core::{CoreError, CoreResult, ToolCallRequest, ToolCallResult, ToolDefinition};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::tools::{LocalSearchTool, ToolHandler, WebSearchTool};

/// Ordered set of tools; listing order is registration order
#[derive(Default)]
pub struct ToolRegistry {
    handlers: Vec<Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding `web_search` followed by `local_search`, both backed by `backend`
    pub fn with_search_tools(backend: Arc<dyn SearchBackend>) -> CoreResult<Self> {
        let mut registry = Self::new();
        registry.register(Arc::new(WebSearchTool::new(backend.clone())))?;
        registry.register(Arc::new(LocalSearchTool::new(backend)))?;
        Ok(registry)
    }

    pub fn register(&mut self, handler: Arc<dyn ToolHandler>) -> CoreResult<()> {
        let name = &handler.definition().name;
        if self.get(name).is_some() {
            return Err(CoreError::DuplicateTool(name.clone()));
        }
        debug!("Registered tool {}", name);
        self.handlers.push(handler);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn ToolHandler>> {
        self.handlers.iter().find(|h| h.definition().name == name)
    }

    pub fn list_tools(&self) -> Vec<&ToolDefinition> {
        self.handlers.iter().map(|h| h.definition()).collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run a tool call. Every failure, including an unknown tool name, is folded into
    /// an error envelope whose single text block reads `Error: <message>`.
    pub async fn call_tool(&self, request: &ToolCallRequest) -> ToolCallResult {
        match self.dispatch(request).await {
            Ok(text) => ToolCallResult::text(text),
            Err(e) => {
                warn!("Tool {} failed: {}", request.name, e);
                ToolCallResult::error(format!("Error: {}", e))
            }
        }
    }

    async fn dispatch(&self, request: &ToolCallRequest) -> CoreResult<String> {
        let handler = self
            .get(&request.name)
            .ok_or_else(|| CoreError::UnknownTool(request.name.clone()))?;

        if let Some(JsonValue::Object(args)) = &request.arguments {
            let definition = handler.definition();
            let ignored: Vec<&str> = args
                .keys()
                .filter(|k| definition.param_spec(k).is_none())
                .map(String::as_str)
                .collect();
            if !ignored.is_empty() {
                debug!("Ignoring undeclared arguments for {}: {:?}", request.name, ignored);
            }
        }

        handler.call(request.arguments.as_ref()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::RecordingBackend;
    use brave_search_core::{LocalSearchQuery, WebSearchQuery};
    use serde_json::json;

    fn registry() -> (Arc<RecordingBackend>, ToolRegistry) {
        let backend = Arc::new(RecordingBackend::default());
        (backend.clone(), ToolRegistry::with_search_tools(backend).unwrap())
    }

    #[test]
    fn lists_web_then_local() {
        let (_, registry) = registry();
        let names: Vec<&str> = registry.list_tools().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["web_search", "local_search"]);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let (backend, mut registry) = registry();
        let err = registry.register(Arc::new(WebSearchTool::new(backend))).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateTool(ref n) if n == "web_search"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn empty_registry_accepts_registrations_in_order() {
        let backend: Arc<dyn SearchBackend> = Arc::new(RecordingBackend::default());
        let mut registry = ToolRegistry::new();
        assert!(registry.is_empty());
        registry.register(Arc::new(LocalSearchTool::new(backend.clone()))).unwrap();
        registry.register(Arc::new(WebSearchTool::new(backend))).unwrap();
        let names: Vec<&str> = registry.list_tools().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["local_search", "web_search"]);
    }

    #[tokio::test]
    async fn web_search_defaults_reach_backend() {
        let (backend, registry) = registry();
        let result = registry.call_tool(&ToolCallRequest::new("web_search", json!({"query": "q"}))).await;
        assert!(!result.is_error());
        assert_eq!(result.text_content(), "web:q");
        assert_eq!(backend.web_calls(), vec![WebSearchQuery::new("q", 10, 0)]);
    }

    #[tokio::test]
    async fn local_search_defaults_reach_backend() {
        let (backend, registry) = registry();
        registry.call_tool(&ToolCallRequest::new("local_search", json!({"query": "tacos"}))).await;
        assert_eq!(backend.local_calls(), vec![LocalSearchQuery::new("tacos", 5)]);
    }

    #[tokio::test]
    async fn missing_query_is_an_error_envelope_without_upstream_calls() {
        let (backend, registry) = registry();
        let result = registry.call_tool(&ToolCallRequest::new("web_search", json!({}))).await;
        assert!(result.is_error());
        assert_eq!(result.content().len(), 1);
        assert!(result.text_content().starts_with("Error: Invalid arguments for web_search"));
        assert!(backend.web_calls().is_empty());
        assert!(backend.local_calls().is_empty());
    }

    #[tokio::test]
    async fn every_listed_tool_is_routable() {
        let (_, registry) = registry();
        let names: Vec<String> = registry.list_tools().iter().map(|d| d.name.clone()).collect();
        assert_eq!(names.len(), 2);
        for name in names {
            let result = registry.call_tool(&ToolCallRequest::new(name.as_str(), json!({"query": "q"}))).await;
            assert!(!result.is_error(), "{} failed: {}", name, result.text_content());
        }
    }

    #[tokio::test]
    async fn names_outside_the_listing_are_unknown() {
        let (backend, registry) = registry();
        for name in ["", "Web_Search", "brave_web_search", "local_search "] {
            let result = registry.call_tool(&ToolCallRequest::new(name, json!({"query": "q"}))).await;
            assert!(result.is_error());
            assert_eq!(result.text_content(), format!("Error: Unknown tool: {}", name));
        }
        assert!(backend.web_calls().is_empty());
        assert!(backend.local_calls().is_empty());
    }

    #[tokio::test]
    async fn unknown_tool_is_an_error_envelope() {
        let (_, registry) = registry();
        let result = registry.call_tool(&ToolCallRequest::new("image_search", json!({"query": "x"}))).await;
        assert!(result.is_error());
        assert_eq!(result.text_content(), "Error: Unknown tool: image_search");
    }

    #[tokio::test]
    async fn upstream_failure_is_an_error_envelope() {
        let backend = Arc::new(RecordingBackend::failing("bad gateway"));
        let registry = ToolRegistry::with_search_tools(backend).unwrap();
        let result = registry.call_tool(&ToolCallRequest::new("web_search", json!({"query": "q"}))).await;
        assert!(result.is_error());
        assert!(result.text_content().starts_with("Error: "));
        assert!(result.text_content().contains("bad gateway"));
    }

    #[tokio::test]
    async fn undeclared_arguments_are_ignored() {
        let (backend, registry) = registry();
        let result = registry
            .call_tool(&ToolCallRequest::new("web_search", json!({"query": "q", "safesearch": "off"})))
            .await;
        assert!(!result.is_error());
        assert_eq!(backend.web_calls().len(), 1);
    }
}
