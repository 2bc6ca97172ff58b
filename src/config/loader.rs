//! Configuration loading: optional TOML file, then environment overrides.

use std::fs;
use std::path::Path;

use crate::config::schema::{ProxyConfig, Secret};
use crate::config::validation::{validate_config, ValidationError};

/// Upstream API key.
pub const ENV_UPSTREAM_KEY: &str = "KCSC_OPENAPI_KEY";
/// Optional caller shared secret.
pub const ENV_SHARED_SECRET: &str = "PROXY_API_KEY";
/// Listener port; the host stays `0.0.0.0`.
pub const ENV_PORT: &str = "PORT";
/// Upstream base URL override.
pub const ENV_BASE_URL: &str = "KCSC_BASE_URL";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("PORT must be a port number, got `{0}`")]
    InvalidPort(String),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from `path` (or defaults), apply the process
/// environment, and validate.
pub fn load_config(path: Option<&Path>) -> Result<ProxyConfig, ConfigError> {
    let config = match path {
        Some(path) => read_config_file(path)?,
        None => ProxyConfig::default(),
    };

    let config = apply_env(config, |name| std::env::var(name).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Parse a TOML config file without applying the environment.
pub fn read_config_file(path: &Path) -> Result<ProxyConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Overlay environment values on `config`. `lookup` returns the value of a
/// variable if it is set.
pub fn apply_env<F>(mut config: ProxyConfig, lookup: F) -> Result<ProxyConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = lookup(ENV_UPSTREAM_KEY) {
        config.upstream.api_key = Secret::new(key);
    }
    if let Some(secret) = lookup(ENV_SHARED_SECRET) {
        config.auth.shared_secret = Secret::new(secret);
    }
    if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.is_empty()) {
        config.upstream.base_url = base_url;
    }
    if let Some(port) = lookup(ENV_PORT).filter(|v| !v.is_empty()) {
        let port = parse_port(&port)?;
        config.listener.bind_address = format!("0.0.0.0:{}", port);
    }
    Ok(config)
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort(raw.to_string()))
}
