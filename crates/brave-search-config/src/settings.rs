use crate::error::{ConfigError, ConfigResult};
use crate::loader::SettingsFile;
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

pub const API_KEY_VAR: &str = "BRAVE_API_KEY";
pub const BASE_URL_VAR: &str = "BRAVE_SEARCH_BASE_URL";
pub const TIMEOUT_VAR: &str = "BRAVE_SEARCH_TIMEOUT_SECS";
pub const USER_AGENT_VAR: &str = "BRAVE_SEARCH_USER_AGENT";

pub const DEFAULT_BASE_URL: &str = "https://api.search.brave.com/res/v1";
const DEFAULT_USER_AGENT: &str = concat!("brave-search-mcp/", env!("CARGO_PKG_VERSION"));

/// Subscription token for the search provider. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Process-wide, read-only server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub api_key: ApiKey,
    /// Provider API root, without a trailing slash
    pub base_url: String,
    /// Per-request HTTP timeout; `None` keeps the client default
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl ServerConfig {
    /// Configuration with provider defaults and the given key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: ApiKey::new(api_key),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load from the process environment and an optional settings file
    pub fn from_env(settings_path: Option<&Path>) -> ConfigResult<Self> {
        Self::load(settings_path, |name| std::env::var(name).ok())
    }

    /// Load using `lookup` for variables. Precedence: defaults < settings file < variables.
    pub fn load<F>(settings_path: Option<&Path>, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey(API_KEY_VAR))?;

        let mut config = Self::new(api_key);

        if let Some(path) = settings_path {
            let file = SettingsFile::load_from_file(path)?;
            config = config.apply_settings(file);
        }

        if let Some(url) = lookup(BASE_URL_VAR) {
            config = config.with_base_url(url.trim());
        }
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs = raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                name: TIMEOUT_VAR.to_string(),
                reason: e.to_string(),
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }
        if let Some(agent) = lookup(USER_AGENT_VAR).filter(|a| !a.trim().is_empty()) {
            config.user_agent = agent;
        }

        config.validate()?;
        debug!(
            "Configuration loaded: base_url={}, timeout={:?}",
            config.base_url, config.timeout
        );
        Ok(config)
    }

    fn apply_settings(mut self, file: SettingsFile) -> Self {
        if let Some(url) = file.base_url {
            self = self.with_base_url(url);
        }
        if let Some(secs) = file.timeout_secs {
            self.timeout = Some(Duration::from_secs(secs));
        }
        if let Some(agent) = file.user_agent {
            self.user_agent = agent;
        }
        self
    }

    /// Check the endpoint is an absolute http(s) URL and the timeout is usable
    pub fn validate(&self) -> ConfigResult<()> {
        let parsed = url::Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: self.base_url.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        if self.timeout == Some(Duration::ZERO) {
            return Err(ConfigError::InvalidValue {
                name: "timeout".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
