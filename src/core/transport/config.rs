//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// HTTP transport configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable CORS for browser clients.
    #[serde(default)]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8787
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: false,
        }
    }
}

impl HttpConfig {
    /// Create an HTTP transport config for the given address.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Load transport config from environment variables.
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("KITZ_HTTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or_else(default_port);
        let host = std::env::var("KITZ_HTTP_HOST").unwrap_or_else(|_| default_host());
        let enable_cors = std::env::var("KITZ_HTTP_CORS")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Self {
            host,
            port,
            enable_cors,
        }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        format!("HTTP on {}", self.address())
    }
}
