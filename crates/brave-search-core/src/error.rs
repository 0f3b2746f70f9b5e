use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

/// Failures of a single tool call. All of them end up in an error envelope.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("{0}")]
    Upstream(#[from] UpstreamError),

    #[error("Tool already registered: {0}")]
    DuplicateTool(String),
}

impl CoreError {
    pub fn invalid_arguments(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArguments { tool: tool.into(), reason: reason.into() }
    }
}

/// Search provider failure: non-success status, transport error or a payload
/// that could not be decoded.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct UpstreamError {
    /// HTTP status reported by the provider, if a response was received at all
    pub status: Option<u16>,
    pub message: String,
}

impl UpstreamError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}
