use async_trait::async_trait;
use brave_search_connectors::SearchBackend;
use brave_search_core::{CoreResult, ParamSpec, ToolDefinition, WebSearchQuery};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::debug;

use super::{typed_arguments, ToolHandler};

const DESCRIPTION: &str = "Performs a web search using the Brave Search API, ideal for general \
queries, news, articles, and online content. Use this for broad information gathering, recent \
events, or when you need diverse web sources. Supports pagination. Maximum 20 results per \
request, with offset for pagination.";

/// General web search
pub struct WebSearchTool {
    definition: ToolDefinition,
    backend: Arc<dyn SearchBackend>,
}

impl WebSearchTool {
    pub const NAME: &'static str = "web_search";

    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { definition: Self::tool_definition(), backend }
    }

    pub fn tool_definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, DESCRIPTION)
            .param(ParamSpec::required_string(
                "query",
                "Search query (max 400 chars, 50 words)",
            ))
            .param(
                ParamSpec::optional_integer("count", "Number of results (1-20, default 10)", 10)
                    .with_range(1, 20),
            )
            .param(
                ParamSpec::optional_integer("offset", "Pagination offset (max 9, default 0)", 0)
                    .with_range(0, 9),
            )
    }

    pub fn validate(&self, arguments: Option<&JsonValue>) -> CoreResult<WebSearchQuery> {
        typed_arguments(&self.definition, arguments)
    }

    pub async fn execute(&self, query: WebSearchQuery) -> CoreResult<String> {
        debug!("web_search q={:?} count={} offset={}", query.query, query.count, query.offset);
        Ok(self.backend.web_search(&query).await?)
    }
}

#[async_trait]
impl ToolHandler for WebSearchTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn call(&self, arguments: Option<&JsonValue>) -> CoreResult<String> {
        let query = self.validate(arguments)?;
        self.execute(query).await
    }
}
