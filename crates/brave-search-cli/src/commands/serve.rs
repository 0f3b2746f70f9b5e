//! MCP stdio server command

use brave_search_mcp::{serve_stdio, AppState};
use tracing::info;

use crate::error::CliResult;

pub async fn execute(app_state: AppState) -> CliResult<()> {
    info!("Brave API endpoint: {}", app_state.config.base_url);
    serve_stdio(app_state).await?;
    Ok(())
}
