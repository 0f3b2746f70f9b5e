//! Core types shared by the Brave Search MCP crates.
//!
//! Tool definitions and their JSON Schema rendering, the call request/result
//! envelope, typed search queries and the argument validation step that turns an
//! untyped argument object into a normalized one with defaults applied.

pub mod error;
pub mod query;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{CoreError, CoreResult, UpstreamError};
pub use query::{LocalSearchQuery, WebSearchQuery};
pub use types::{ContentBlock, ParamSpec, ParamType, ToolCallRequest, ToolCallResult, ToolDefinition};
pub use validation::{validate_arguments, SchemaValidationError};
