//! Configuration management for the gateway.
//!
//! Configuration is assembled from defaults, then environment variables
//! (optionally loaded from a `.env` file), then command-line flags.

use super::error::{Error, Result};
use super::transport::HttpConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Main configuration structure for the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP transport configuration.
    pub transport: HttpConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server, used in startup logs.
    pub name: String,

    /// The version of the server binary.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "kitz-gateway".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: HttpConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `KITZ_`.
    /// For example: `KITZ_SERVER_NAME`, `KITZ_LOG_LEVEL`, `KITZ_HTTP_PORT`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("KITZ_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("KITZ_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = HttpConfig::from_env();

        config
    }

    /// Apply bind address overrides from the command line.
    pub fn with_bind(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            info!("Bind host overridden from command line: {}", host);
            self.transport.host = host;
        }
        if let Some(port) = port {
            info!("Bind port overridden from command line: {}", port);
            self.transport.port = port;
        }
        self
    }

    /// Reject configurations the transport cannot bind.
    pub fn validate(&self) -> Result<()> {
        if self.transport.host.trim().is_empty() {
            return Err(Error::config("bind host must not be empty"));
        }
        Ok(())
    }
}
