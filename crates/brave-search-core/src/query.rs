//! Typed per-call search parameters, produced from validated arguments.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSearchQuery {
    pub query: String,
    pub count: u64,
    pub offset: u64,
}

impl WebSearchQuery {
    pub fn new(query: impl Into<String>, count: u64, offset: u64) -> Self {
        Self { query: query.into(), count, offset }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalSearchQuery {
    pub query: String,
    pub count: u64,
}

impl LocalSearchQuery {
    pub fn new(query: impl Into<String>, count: u64) -> Self {
        Self { query: query.into(), count }
    }

    /// The web search issued when the provider knows no places for this query
    pub fn as_web_fallback(&self) -> WebSearchQuery {
        WebSearchQuery::new(self.query.clone(), self.count, 0)
    }
}
