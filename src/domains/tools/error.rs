//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// The requested tool is not registered.
    #[error("unknown tool: {0}")]
    NotFound(String),

    /// The arguments failed a tool's domain check.
    #[error("{0}")]
    InvalidArgument(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid argument" error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
