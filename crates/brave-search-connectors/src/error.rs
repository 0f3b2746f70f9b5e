use brave_search_core::{CoreError, UpstreamError};
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Brave API error: {status}\n{body}")]
    Status { status: StatusCode, body: String },

    #[error("Malformed response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ConnectorError {
    /// HTTP status of the failed exchange, when the provider answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ConnectorError::Status { status, .. } => Some(status.as_u16()),
            ConnectorError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<ConnectorError> for UpstreamError {
    fn from(err: ConnectorError) -> Self {
        UpstreamError::new(err.status(), err.to_string())
    }
}

impl From<ConnectorError> for CoreError {
    fn from(err: ConnectorError) -> Self {
        CoreError::Upstream(err.into())
    }
}

pub type ConnectorResult<T> = Result<T, ConnectorError>;
