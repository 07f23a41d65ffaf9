//! Error types and handling for the gateway.
//!
//! Tool failures never reach this type: the HTTP layer maps them straight to
//! responses. `Error` covers what can stop the process itself.

use thiserror::Error;

/// A specialized Result type for gateway operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the gateway.
#[derive(Debug, Error)]
pub enum Error {
    /// Error raised while binding or serving the transport.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::TransportError;
    use std::io;

    #[test]
    fn test_transport_error_conversion() {
        let source = io::Error::new(io::ErrorKind::AddrInUse, "address in use");
        let err: Error = TransportError::bind("127.0.0.1:8787", source).into();
        assert!(matches!(err, Error::Transport(_)));
        assert_eq!(
            err.to_string(),
            "Transport error: Failed to bind to 127.0.0.1:8787: address in use"
        );
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("port out of range");
        assert!(matches!(err, Error::Config(_)));
    }
}
