//! Echo tool definition.
//!
//! Returns the `message` argument unchanged.

use serde_json::Value;
use tracing::debug;

use crate::domains::tools::{Tool, ToolArgs, ToolError, ToolOutput};

/// Echo tool - returns the provided message.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoTool;

impl EchoTool {
    /// Tool name constant.
    pub const NAME: &'static str = "echo";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Returns the provided message.";
}

impl Tool for EchoTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn invoke(&self, args: &ToolArgs) -> Result<ToolOutput, ToolError> {
        debug!("Echo tool called");

        // Any JSON value is echoed back as given.
        let message = args
            .get("message")
            .cloned()
            .unwrap_or_else(|| Value::String(String::new()));

        let mut output = ToolOutput::new();
        output.insert("echo".to_string(), message);
        Ok(output)
    }
}
