//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `powerctl-skill.toml` in the working directory. Every field has
//! a default so the file is optional. Environment variables take precedence
//! over file values.

use std::time::Duration;

use serde::Deserialize;

use powerctl_adapter_http_client::ClientConfig;
use powerctl_app::auth::{ApiKey, DEFAULT_API_KEY};
use powerctl_domain::mac::MacAddress;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Control server the skill talks to.
    pub control: ControlConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Control server connection settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// Base URL, e.g. `http://192.168.1.10:3000`.
    pub server_url: String,
    pub api_key: String,
    /// MAC address woken by "turn on".
    pub mac: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `powerctl-skill.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting values are invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("powerctl-skill.toml")?;
        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("POWERCTL_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("COMPUTER_SERVER_URL") {
            self.control.server_url = val;
        }
        if let Some(val) = var("API_KEY") {
            self.control.api_key = val;
        }
        if let Some(val) = var("COMPUTER_MAC") {
            self.control.mac = val;
        }
        if let Some(val) = var("POWERCTL_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.control.server_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "server_url must not be empty".to_string(),
            ));
        }
        if self.control.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "timeout_secs must be non-zero".to_string(),
            ));
        }
        self.mac()?;
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// The MAC address to wake.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if the configured value does not
    /// parse.
    pub fn mac(&self) -> Result<MacAddress, ConfigError> {
        self.control
            .mac
            .parse()
            .map_err(|err| ConfigError::Validation(format!("mac: {err}")))
    }

    /// Settings for the outbound control server client.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.control.server_url.clone(),
            api_key: ApiKey::new(self.control.api_key.clone()),
            timeout: Duration::from_secs(self.control.timeout_secs),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
        }
    }
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:3000".to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            mac: "00:11:22:33:44:55".to_string(),
            timeout_secs: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "powerctl_skill=info,powerctl=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
