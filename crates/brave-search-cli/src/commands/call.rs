use brave_search_core::ToolCallRequest;
use brave_search_mcp::AppState;
use tracing::debug;

use crate::error::{CliError, CliResult};
use crate::utils::parse_tool_arguments;

/// One-shot tool call through the same registry the server uses
pub struct CallCommand;

impl CallCommand {
    pub async fn run(app_state: &AppState, tool: &str, args: Option<&str>) -> CliResult<()> {
        let arguments = parse_tool_arguments(args)?;
        let request = ToolCallRequest { name: tool.to_string(), arguments };
        debug!("Calling {} with {:?}", request.name, request.arguments);

        let result = app_state.registry()?.call_tool(&request).await;
        println!("{}", result.text_content());

        if result.is_error() {
            return Err(CliError::ToolFailed(tool.to_string()));
        }
        Ok(())
    }
}
