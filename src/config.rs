//! Configuration for docgate

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use url::Url;

/// Environment variable overriding the backend base URL
pub const BACKEND_URL_ENV: &str = "DOCGATE_BACKEND_URL";

/// Main configuration for the gateway
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Backend collaborator configuration
    #[serde(default)]
    pub backend: BackendConfig,
    /// Browser-facing HTTP server configuration
    #[serde(default)]
    pub http: HttpConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error: the gateway runs with defaults so a
    /// fresh checkout works against a local backend without any setup. The
    /// `DOCGATE_BACKEND_URL` environment variable, when set, overrides the
    /// configured backend base URL either way.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(|e| {
                anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
            })?;
            toml::from_str(&content).map_err(|e| {
                anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
            })?
        } else {
            tracing::debug!("No config file at '{}', using defaults", path.display());
            Config::default()
        };
        if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
            config.backend.base_url = url;
        }
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration fields.
    ///
    /// Collects all validation errors and reports them together so the user
    /// can fix everything in one pass.
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();

        match Url::parse(&self.backend.base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => errors.push(format!(
                "backend base_url must use http or https, got '{}'",
                url.scheme()
            )),
            Err(e) => errors.push(format!(
                "backend base_url '{}' is not a valid URL: {}",
                self.backend.base_url, e
            )),
        }
        if self.backend.request_timeout_secs == 0 {
            errors.push("backend request_timeout_secs must be positive".to_string());
        }

        match self.http.listen_addr.rsplit_once(':') {
            Some((host, port_str)) if !host.is_empty() => match port_str.parse::<u32>() {
                Ok(port) if (1..=65535).contains(&port) => {}
                Ok(port) => errors.push(format!(
                    "HTTP listen port must be between 1 and 65535, got {}",
                    port
                )),
                Err(_) => errors.push(format!(
                    "HTTP listen_addr '{}' must be host:port",
                    self.http.listen_addr
                )),
            },
            _ => errors.push(format!(
                "HTTP listen_addr '{}' must be host:port",
                self.http.listen_addr
            )),
        }

        if errors.is_empty() {
            Ok(())
        } else {
            anyhow::bail!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            );
        }
    }
}

/// Backend collaborator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the document/chat backend
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_timeout(),
        }
    }
}

/// Browser-facing HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Listen address for the gateway (e.g., "127.0.0.1:3000")
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Enable CORS (the gateway exists to serve browsers)
    #[serde(default = "default_true")]
    pub cors_enabled: bool,
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            cors_enabled: true,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

/// Log severity level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log format
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: LogLevel,
}

fn default_log_format() -> LogFormat {
    LogFormat::Text
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            level: LogLevel::Info,
        }
    }
}
