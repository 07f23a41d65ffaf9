//! Tool handler abstraction.
//!
//! Every invokable unit implements the [`Tool`] trait. Built-in tools are unit
//! structs under `definitions/`; callers that want to register their own
//! behavior without a dedicated type can wrap a closure in [`FnTool`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::ToolError;

/// Arguments passed to a tool: a JSON object.
pub type ToolArgs = Map<String, Value>;

/// Result returned by a tool: always a JSON object.
pub type ToolOutput = Map<String, Value>;

/// Public metadata of a registered tool, as reported by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSummary {
    /// The unique tool name.
    pub name: String,

    /// Human-readable description.
    pub description: String,
}

/// Trait implemented by every invokable tool.
///
/// Implementations must be free of shared mutable state: the registry hands
/// the same instance to concurrent requests without any locking.
pub trait Tool: Send + Sync {
    /// Get the name of this tool.
    fn name(&self) -> &str;

    /// Get the description of this tool.
    fn description(&self) -> &str;

    /// Execute the tool with the given arguments.
    ///
    /// Missing keys are allowed; each tool applies its own defaults.
    fn invoke(&self, args: &ToolArgs) -> Result<ToolOutput, ToolError>;

    /// Metadata for listings.
    fn summary(&self) -> ToolSummary {
        ToolSummary {
            name: self.name().to_string(),
            description: self.description().to_string(),
        }
    }
}

type ToolFn = dyn Fn(&ToolArgs) -> Result<ToolOutput, ToolError> + Send + Sync;

/// A tool backed by a closure.
pub struct FnTool {
    name: String,
    description: String,
    func: Box<ToolFn>,
}

impl FnTool {
    /// Create a tool from a name, a description and a function.
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, func: F) -> Self
    where
        F: Fn(&ToolArgs) -> Result<ToolOutput, ToolError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            func: Box::new(func),
        }
    }
}

impl Tool for FnTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn invoke(&self, args: &ToolArgs) -> Result<ToolOutput, ToolError> {
        (self.func)(args)
    }
}

impl std::fmt::Debug for FnTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
