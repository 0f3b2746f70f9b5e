//! Startup configuration: the provider credential and endpoint settings.
//!
//! Configuration is read once when the process starts. Environment variables take
//! precedence over an optional YAML/JSON settings file; the API key only ever comes
//! from the environment.

pub mod error;
pub mod loader;
pub mod settings;

pub use error::{ConfigError, ConfigResult};
pub use loader::{FileFormat, SettingsFile};
pub use settings::{
    ApiKey, ServerConfig, API_KEY_VAR, BASE_URL_VAR, DEFAULT_BASE_URL, TIMEOUT_VAR,
    USER_AGENT_VAR,
};
