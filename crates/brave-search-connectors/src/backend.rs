use async_trait::async_trait;
use brave_search_core::{LocalSearchQuery, WebSearchQuery};

use crate::error::ConnectorResult;

/// A search provider able to answer both tool kinds with rendered text.
///
/// The tool handlers only see this trait, so they can run against a recording stub.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn web_search(&self, query: &WebSearchQuery) -> ConnectorResult<String>;

    async fn local_search(&self, query: &LocalSearchQuery) -> ConnectorResult<String>;
}
