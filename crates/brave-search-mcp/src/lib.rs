//! Brave Search MCP (Model Context Protocol) Server
//!
//! Exposes the provider's web and local search as two MCP tools, `web_search` and
//! `local_search`, over newline-delimited JSON-RPC on stdio.

pub mod app_state;
pub mod error;
pub mod jsonrpc;
pub mod mcp;
pub mod registry;
pub mod server;
pub mod tools;

// Re-export key types
pub use app_state::AppState;
pub use error::{McpError, McpResult};
pub use registry::ToolRegistry;
pub use server::{serve, serve_stdio, McpServer};
pub use tools::{LocalSearchTool, ToolHandler, WebSearchTool};
