//! Transport service - starts the gateway on its configured transport.

use tracing::info;

use super::HttpConfig;
use super::http::HttpTransport;
use crate::core::{Gateway, Result};

/// Transport service - manages the transport layer for the gateway.
pub struct TransportService {
    config: HttpConfig,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Log information about the configured transport.
    pub fn log_info(&self) {
        info!("Starting transport: {}", self.config.description());
    }

    /// Start the transport with the given gateway.
    ///
    /// This method blocks until the transport is shut down.
    pub async fn run(self, gateway: Gateway) -> Result<()> {
        self.log_info();
        HttpTransport::new(self.config).run(gateway).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::TransportError;
    use crate::core::{Config, Error};
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_run_reports_bind_failure() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let service = TransportService::new(HttpConfig::new("127.0.0.1", port));
        let err = service
            .run(Gateway::new(Config::default()))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Transport(TransportError::BindError { .. })
        ));
        assert!(err.to_string().contains(&format!("127.0.0.1:{port}")));
    }
}
