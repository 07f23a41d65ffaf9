//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A catalog of tools keyed by name, frozen after construction
//! - Tool metadata for listing, in registration order
//! - Dispatch of invocations by name

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, warn};

use super::definitions::{EchoTool, SumTool, UtcNowTool};
use super::error::ToolError;
use super::handlers::{Tool, ToolArgs, ToolOutput, ToolSummary};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - holds every invokable tool.
///
/// The registry exposes no way to add or remove tools once built, so it can be
/// shared across threads behind an `Arc` without locking.
pub struct ToolRegistry {
    /// Tools keyed by name, in the order names were first registered.
    tools: IndexMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Build a registry from a list of tools.
    ///
    /// A later tool with an already-registered name replaces the earlier one
    /// but keeps its listing position.
    pub fn new<I>(tools: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Tool>>,
    {
        let mut map = IndexMap::new();

        for tool in tools {
            let name = tool.name().to_string();
            if map.contains_key(&name) {
                debug!("Replacing tool: {}", name);
            } else {
                debug!("Registering tool: {}", name);
            }
            // `insert` keeps the slot of an existing key.
            map.insert(name, tool);
        }

        Self { tools: map }
    }

    /// Build the registry of built-in tools.
    pub fn with_defaults() -> Self {
        Self::new(default_tools())
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Whether a tool with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Get all tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Name and description of every tool, in registration order.
    pub fn list_tools(&self) -> Vec<ToolSummary> {
        self.tools.values().map(|tool| tool.summary()).collect()
    }

    /// Invoke a tool by name.
    ///
    /// Errors raised by the tool are returned unchanged.
    pub fn invoke(&self, name: &str, args: &ToolArgs) -> Result<ToolOutput, ToolError> {
        match self.get(name) {
            Some(tool) => tool.invoke(args),
            None => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tool_names())
            .finish()
    }
}

/// The built-in tools, in listing order.
pub fn default_tools() -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(EchoTool) as Arc<dyn Tool>,
        Arc::new(UtcNowTool),
        Arc::new(SumTool),
    ]
}
