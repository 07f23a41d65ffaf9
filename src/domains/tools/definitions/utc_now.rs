//! UTC clock tool definition.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use tracing::debug;

use crate::domains::tools::{Tool, ToolArgs, ToolError, ToolOutput};

/// Returns the current instant as an RFC 3339 timestamp with a `+00:00` offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtcNowTool;

impl UtcNowTool {
    /// Tool name constant.
    pub const NAME: &'static str = "utc_now";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Returns current UTC timestamp.";

    /// Format the current wall-clock time.
    pub fn now_iso() -> String {
        format_iso(Utc::now())
    }
}

/// RFC 3339 with microseconds, dropping the fraction on whole seconds.
fn format_iso(instant: DateTime<Utc>) -> String {
    let precision = if instant.timestamp_subsec_micros() == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Micros
    };
    instant.to_rfc3339_opts(precision, false)
}

impl Tool for UtcNowTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn invoke(&self, _args: &ToolArgs) -> Result<ToolOutput, ToolError> {
        debug!("UTC clock tool called");

        let mut output = ToolOutput::new();
        output.insert("utc_iso".to_string(), Value::String(Self::now_iso()));
        Ok(output)
    }
}
