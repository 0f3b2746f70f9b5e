use brave_search_mcp::{mcp::Tool, AppState};
use serde_json::json;

use crate::error::CliResult;

/// Print tool definitions in `tools/list` shape
pub struct ToolsCommand;

impl ToolsCommand {
    pub fn run(app_state: &AppState) -> CliResult<()> {
        let registry = app_state.registry()?;
        let tools: Vec<Tool> = registry.list_tools().into_iter().map(Tool::from).collect();
        println!("{}", serde_json::to_string_pretty(&json!({ "tools": tools }))?);
        Ok(())
    }
}
