use brave_search_config::ServerConfig;
use brave_search_connectors::{BraveClient, SearchBackend};
use std::sync::Arc;

use crate::{registry::ToolRegistry, McpResult};

/// Application state shared across the MCP server
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub backend: Arc<dyn SearchBackend>,
}

impl AppState {
    pub fn new(config: ServerConfig, backend: Arc<dyn SearchBackend>) -> Self {
        Self { config: Arc::new(config), backend }
    }

    /// State backed by the live provider client
    pub fn from_config(config: ServerConfig) -> McpResult<Self> {
        let client = BraveClient::new(&config)?;
        Ok(Self::new(config, Arc::new(client)))
    }

    pub fn registry(&self) -> McpResult<ToolRegistry> {
        Ok(ToolRegistry::with_search_tools(self.backend.clone())?)
    }
}
