//! Configuration for the Valoruf client
//!
//! # Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`VALORUF_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use valoruf::config::ValorufConfig;
//!
//! // Load defaults
//! let config = ValorufConfig::default();
//! assert_eq!(config.api.timeout_seconds, 10);
//!
//! // Parse from TOML
//! let toml = r#"
//! [api]
//! base_url = "https://uf.example.cl/api/uf"
//! "#;
//! let config: ValorufConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.api.base_url, "https://uf.example.cl/api/uf");
//! ```

pub mod error;
pub mod logging;

pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default backend address: the Flask development server, plus the fixed
/// `/api/uf` base every query path hangs off.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/uf";

/// Unified configuration for the client.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ValorufConfig {
    /// Backend API settings
    pub api: ApiConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Backend API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL including the `/api/uf` prefix
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 10,
        }
    }
}

impl ValorufConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supports VALORUF_* environment variables for common settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("VALORUF_BASE_URL") {
            self.api.base_url = url;
        }
        if let Ok(timeout) = std::env::var("VALORUF_TIMEOUT_SECONDS") {
            if let Ok(t) = timeout.parse() {
                self.api.timeout_seconds = t;
            }
        }
        if let Ok(level) = std::env::var("VALORUF_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("VALORUF_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "api.base_url".to_string(),
                message: "base URL cannot be empty".to_string(),
            });
        }
        if self.api.timeout_seconds == 0 {
            return Err(ConfigError::Validation {
                field: "api.timeout_seconds".to_string(),
                message: "timeout must be non-zero".to_string(),
            });
        }
        Ok(())
    }
}
