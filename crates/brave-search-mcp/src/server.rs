//! MCP server: method dispatch and the newline-delimited stdio loop

use brave_search_core::ToolCallRequest;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use crate::{
    jsonrpc::{
        error_response, success_response, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
        JSONRPC_VERSION,
    },
    mcp::{
        Implementation, InitializeRequest, InitializeResponse, ServerCapabilities, Tool,
        ToolsCapability, ToolsListRequest, ToolsListResponse, LATEST_PROTOCOL_VERSION,
        METHOD_INITIALIZE, METHOD_PING, METHOD_TOOLS_CALL, METHOD_TOOLS_LIST,
        NOTIFICATION_INITIALIZED, SERVER_NAME, SUPPORTED_PROTOCOL_VERSIONS,
    },
    registry::ToolRegistry,
    AppState, McpError, McpResult,
};

/// MCP Server
pub struct McpServer {
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    pub fn from_app_state(app_state: &AppState) -> McpResult<Self> {
        Ok(Self::new(app_state.registry()?))
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Process a single MCP message.
    ///
    /// `Ok(None)` means the message was a notification. `Err` is only returned when the
    /// message could not be read as a request at all, so no request id is known.
    pub async fn process_message(&self, body: &[u8]) -> McpResult<Option<JsonRpcResponse>> {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            error!("Failed to parse JSON-RPC message: {}", e);
            McpError::Parse(e)
        })?;

        if value.is_array() {
            return Err(McpError::InvalidRequest("Batch requests are not supported".to_string()));
        }

        let request: JsonRpcRequest = serde_json::from_value(value)
            .map_err(|e| McpError::InvalidRequest(e.to_string()))?;

        debug!("Processing method: {}", request.method);

        if request.jsonrpc != JSONRPC_VERSION {
            return Ok(Some(error_response(
                request.id,
                JsonRpcError::invalid_request()
                    .with_data(json!({"message": "Invalid JSON-RPC version"})),
            )));
        }

        // Notifications never get a response
        if request.is_notification() {
            self.handle_notification(&request);
            return Ok(None);
        }

        let result = match request.method.as_str() {
            METHOD_INITIALIZE => self.handle_initialize(&request),
            METHOD_PING => Ok(json!({})),
            METHOD_TOOLS_LIST => self.handle_tools_list(&request),
            METHOD_TOOLS_CALL => self.handle_tools_call(&request).await,
            _ => {
                return Ok(Some(error_response(
                    request.id,
                    JsonRpcError::method_not_found().with_data(json!({"method": request.method})),
                )))
            }
        };

        let response = match result {
            Ok(value) => success_response(request.id, value),
            Err(e) => {
                error!("{} failed: {}", request.method, e);
                error_response(request.id, e.to_jsonrpc_error())
            }
        };
        Ok(Some(response))
    }

    fn handle_notification(&self, request: &JsonRpcRequest) {
        if request.method == NOTIFICATION_INITIALIZED {
            info!("Client initialized");
        } else {
            debug!("Received notification {}, ignoring", request.method);
        }
    }

    fn handle_initialize(&self, request: &JsonRpcRequest) -> McpResult<Value> {
        let params = request.params.as_ref().ok_or_else(|| {
            McpError::InvalidParams("Missing params for initialize".to_string())
        })?;
        let init_request: InitializeRequest = serde_json::from_value(params.clone())
            .map_err(|e| McpError::InvalidParams(e.to_string()))?;

        if let Some(client) = &init_request.client_info {
            info!("Initialize from {} {}", client.name, client.version);
        }

        // Echo a supported version, otherwise offer the latest one
        let protocol_version =
            if SUPPORTED_PROTOCOL_VERSIONS.contains(&init_request.protocol_version.as_str()) {
                init_request.protocol_version
            } else {
                LATEST_PROTOCOL_VERSION.to_string()
            };

        let response = InitializeResponse {
            protocol_version,
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability { list_changed: false }),
            },
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "Brave Search MCP Server - web_search for general queries, local_search for places"
                    .to_string(),
            ),
        };
        Ok(serde_json::to_value(response)?)
    }

    fn handle_tools_list(&self, request: &JsonRpcRequest) -> McpResult<Value> {
        let params: ToolsListRequest = match &request.params {
            Some(params) => serde_json::from_value(params.clone())
                .map_err(|e| McpError::InvalidParams(e.to_string()))?,
            None => ToolsListRequest::default(),
        };
        if params.cursor.is_some() {
            debug!("Ignoring tools/list cursor, all tools fit in one page");
        }

        let tools: Vec<Tool> = self.registry.list_tools().into_iter().map(Tool::from).collect();
        Ok(serde_json::to_value(ToolsListResponse { tools, next_cursor: None })?)
    }

    async fn handle_tools_call(&self, request: &JsonRpcRequest) -> McpResult<Value> {
        let params = request.params.as_ref().ok_or_else(|| {
            McpError::InvalidParams("Missing params for tools/call".to_string())
        })?;
        let call: ToolCallRequest = serde_json::from_value(params.clone())
            .map_err(|e| McpError::InvalidParams(e.to_string()))?;

        info!("Calling tool {}", call.name);
        let result = self.registry.call_tool(&call).await;
        Ok(serde_json::to_value(result)?)
    }
}

/// Serve MCP over stdio until stdin closes
pub async fn serve_stdio(app_state: AppState) -> McpResult<()> {
    info!("Starting Brave Search MCP server (stdio mode)");
    let server = McpServer::from_app_state(&app_state)?;
    serve(&server, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}

/// Read one JSON-RPC message per line from `reader` and write one response line per
/// request to `writer`. Returns when the reader reaches end of input.
///
/// Lines are read as raw bytes, so a frame that is not UTF-8 gets a parse error
/// response like any other malformed frame.
pub async fn serve<R, W>(server: &McpServer, mut reader: R, mut writer: W) -> McpResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        if buf.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        debug!("Processing line: {}", String::from_utf8_lossy(&buf).trim());

        let response = match server.process_message(&buf).await {
            Ok(response) => response,
            Err(e) => {
                error!("Error processing message: {}", e);
                Some(error_response(None, e.to_jsonrpc_error()))
            }
        };

        if let Some(response) = response {
            write_response(&mut writer, &response).await?;
        }
    }

    info!("MCP server stopped");
    Ok(())
}

async fn write_response<W: AsyncWrite + Unpin>(
    writer: &mut W,
    response: &JsonRpcResponse,
) -> McpResult<()> {
    let mut bytes = serde_json::to_vec(response)?;
    bytes.push(b'\n');
    writer.write_all(&bytes).await?;
    writer.flush().await?;
    Ok(())
}
