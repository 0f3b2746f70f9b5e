use async_trait::async_trait;
use brave_search_connectors::SearchBackend;
use brave_search_core::{CoreResult, LocalSearchQuery, ParamSpec, ToolDefinition};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::debug;

use super::{typed_arguments, ToolHandler};

const DESCRIPTION: &str = "Searches for local businesses and places using Brave's Local Search \
API. Best for queries related to physical locations, businesses, restaurants, services, etc. \
Returns detailed information including:\n\
- Business names and addresses\n\
- Ratings and review counts\n\
- Phone numbers and opening hours\n\
Use this when the query implies 'near me' or mentions specific locations. Automatically falls \
back to web search if no local results are found.";

/// Places and businesses search, degrading to web search when nothing local matches
pub struct LocalSearchTool {
    definition: ToolDefinition,
    backend: Arc<dyn SearchBackend>,
}

impl LocalSearchTool {
    pub const NAME: &'static str = "local_search";

    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { definition: Self::tool_definition(), backend }
    }

    pub fn tool_definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, DESCRIPTION)
            .param(ParamSpec::required_string(
                "query",
                "Local search query (e.g. 'pizza near Central Park')",
            ))
            .param(
                ParamSpec::optional_integer("count", "Number of results (1-20, default 5)", 5)
                    .with_range(1, 20),
            )
    }

    pub fn validate(&self, arguments: Option<&JsonValue>) -> CoreResult<LocalSearchQuery> {
        typed_arguments(&self.definition, arguments)
    }

    pub async fn execute(&self, query: LocalSearchQuery) -> CoreResult<String> {
        debug!("local_search q={:?} count={}", query.query, query.count);
        Ok(self.backend.local_search(&query).await?)
    }
}

#[async_trait]
impl ToolHandler for LocalSearchTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn call(&self, arguments: Option<&JsonValue>) -> CoreResult<String> {
        let query = self.validate(arguments)?;
        self.execute(query).await
    }
}
