//! Runtime configuration.
//!
//! Reads an optional `faqbot.ron` file; `FAQBOT_API_URL` overrides the base URL.

use std::fs;
use std::path::Path;
use std::time::Duration;

use engine_logging::engine_info;
use faqbot_core::{CoreOptions, ExpiryPolicy};
use faqbot_engine::BackendSettings;
use serde::Deserialize;

pub const CONFIG_FILENAME: &str = "faqbot.ron";
pub const API_URL_ENV: &str = "FAQBOT_API_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
    #[error("invalid base url {url}: {message}")]
    InvalidBaseUrl { url: String, message: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    base_url: Option<String>,
    connect_timeout_secs: Option<u64>,
    request_timeout_secs: Option<u64>,
    /// Cancel a notification's expiry timer when it is replaced.
    scoped_expiry: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub backend: BackendSettings,
    pub core: CoreOptions,
}

/// Loads `path` if it exists, then applies the environment override.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let env_url = std::env::var(API_URL_ENV).ok();
    load_config_with(path, env_url)
}

pub(crate) fn load_config_with(
    path: &Path,
    env_url: Option<String>,
) -> Result<AppConfig, ConfigError> {
    let file = read_config_file(path)?;
    let mut config = AppConfig::default();

    if let Some(url) = file.base_url {
        config.backend.base_url = url;
    }
    if let Some(secs) = file.connect_timeout_secs {
        config.backend.connect_timeout = Duration::from_secs(secs);
    }
    if let Some(secs) = file.request_timeout_secs {
        config.backend.request_timeout = Duration::from_secs(secs);
    }
    if file.scoped_expiry {
        config.core.expiry_policy = ExpiryPolicy::Scoped;
    }
    if let Some(url) = env_url.filter(|url| !url.trim().is_empty()) {
        config.backend.base_url = url;
    }

    config
        .backend
        .endpoint("/")
        .map_err(|err| ConfigError::InvalidBaseUrl {
            url: config.backend.base_url.clone(),
            message: err.message,
        })?;
    engine_info!("Using backend at {}", config.backend.base_url);
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigFile::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                source,
            })
        }
    };
    ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use faqbot_engine::DEFAULT_BASE_URL;
    use tempfile::TempDir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config_with(&temp.path().join(CONFIG_FILENAME), None).unwrap();
        assert_eq!(config.backend.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.core.expiry_policy, ExpiryPolicy::FirstTimerWins);
    }

    #[test]
    fn file_values_apply_and_env_wins() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            r#"(base_url: Some("http://faq.internal:9000"), request_timeout_secs: Some(5), scoped_expiry: true)"#,
        )
        .unwrap();

        let config = load_config_with(&path, None).unwrap();
        assert_eq!(config.backend.base_url, "http://faq.internal:9000");
        assert_eq!(config.backend.request_timeout, Duration::from_secs(5));
        assert_eq!(config.core.expiry_policy, ExpiryPolicy::Scoped);

        let config = load_config_with(&path, Some("http://127.0.0.1:1234".to_string())).unwrap();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:1234");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "(base_url: 42)").unwrap();
        assert!(matches!(
            load_config_with(&path, None),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let temp = TempDir::new().unwrap();
        let result = load_config_with(
            &temp.path().join(CONFIG_FILENAME),
            Some("localhost without scheme".to_string()),
        );
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }
}
