pub mod backend;
pub mod brave;
pub mod error;

// Re-export commonly used types
pub use backend::SearchBackend;
pub use brave::BraveClient;
pub use error::{ConnectorError, ConnectorResult};
