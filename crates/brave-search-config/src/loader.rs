use crate::error::{ConfigError, ConfigResult};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Supported file formats for the settings file
#[derive(Debug, Clone, PartialEq)]
pub enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    /// Detect file format from extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
            Some("json") => Ok(FileFormat::Json),
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }
}

/// Optional overrides read from a settings file.
///
/// Unknown keys are rejected, which also keeps credentials out of the file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl SettingsFile {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        tracing::debug!("Loaded settings file {}", path.display());
        Self::parse_content(&content, format)
    }

    pub fn parse_content(content: &str, format: FileFormat) -> ConfigResult<Self> {
        let settings = match format {
            FileFormat::Yaml => serde_yaml::from_str(content)?,
            FileFormat::Json => serde_json::from_str(content)?,
        };
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(FileFormat::from_path("settings.yaml").unwrap(), FileFormat::Yaml);
        assert_eq!(FileFormat::from_path("settings.yml").unwrap(), FileFormat::Yaml);
        assert_eq!(FileFormat::from_path("settings.json").unwrap(), FileFormat::Json);
        assert!(matches!(
            FileFormat::from_path("settings.toml"),
            Err(ConfigError::UnsupportedFormat(ext)) if ext == "toml"
        ));
        assert!(FileFormat::from_path("settings").is_err());
    }

    #[test]
    fn parses_yaml_settings() {
        let yaml = "base_url: http://localhost:9000/res/v1\ntimeout_secs: 5\n";
        let settings = SettingsFile::parse_content(yaml, FileFormat::Yaml).unwrap();
        assert_eq!(settings.base_url.as_deref(), Some("http://localhost:9000/res/v1"));
        assert_eq!(settings.timeout_secs, Some(5));
        assert_eq!(settings.user_agent, None);
    }

    #[test]
    fn rejects_api_key_in_file() {
        let json = r#"{"api_key": "secret"}"#;
        let err = SettingsFile::parse_content(json, FileFormat::Json).unwrap_err();
        assert!(err.to_string().contains("api_key"));
    }

    #[test]
    fn loads_json_file_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"user_agent": "custom-agent/1.0"}}"#).unwrap();

        let settings = SettingsFile::load_from_file(file.path()).unwrap();
        assert_eq!(settings.user_agent.as_deref(), Some("custom-agent/1.0"));
    }
}
