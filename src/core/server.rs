//! Gateway handle and lifecycle.
//!
//! The [`Gateway`] is what the transport serves: it owns the configuration
//! and a shared, read-only [`ToolRegistry`]. Cloning it is cheap, so each
//! request handler gets its own copy.

use std::sync::Arc;

use tracing::{info, instrument};

use super::config::Config;
use crate::domains::tools::{ToolArgs, ToolError, ToolOutput, ToolRegistry, ToolSummary};

/// API version reported by the health endpoint.
pub const API_VERSION: &str = "0.1";

/// Path prefix shared by every endpoint.
pub const API_PREFIX: &str = "/v0.1";

/// The gateway handler.
#[derive(Clone)]
pub struct Gateway {
    /// Gateway configuration.
    config: Arc<Config>,

    /// Tool catalog, frozen at startup.
    registry: Arc<ToolRegistry>,
}

impl Gateway {
    /// Create a gateway serving the built-in tools.
    pub fn new(config: Config) -> Self {
        Self::with_registry(config, ToolRegistry::with_defaults())
    }

    /// Create a gateway serving a caller-supplied registry.
    pub fn with_registry(config: Config, registry: ToolRegistry) -> Self {
        info!("Gateway initialized with tools: {:?}", registry.tool_names());

        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the gateway configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the tool registry.
    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// List all available tools.
    pub fn list_tools(&self) -> Vec<ToolSummary> {
        self.registry.list_tools()
    }

    /// Call a tool by name.
    ///
    /// Arguments are deliberately kept out of the span.
    #[instrument(skip_all, fields(tool = %name))]
    pub fn call_tool(&self, name: &str, args: &ToolArgs) -> Result<ToolOutput, ToolError> {
        self.registry.invoke(name, args)
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("name", &self.name())
            .field("registry", &self.registry)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::FnTool;
    use serde_json::json;

    #[test]
    fn test_gateway_defaults() {
        let gateway = Gateway::new(Config::default());
        assert_eq!(gateway.name(), "kitz-gateway");
        assert_eq!(gateway.version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(gateway.list_tools().len(), 3);
    }

    #[test]
    fn test_gateway_custom_registry() {
        let registry = ToolRegistry::new(vec![Arc::new(FnTool::new(
            "ping",
            "Replies pong.",
            |_| {
                let mut out = ToolOutput::new();
                out.insert("reply".to_string(), json!("pong"));
                Ok(out)
            },
        )) as Arc<dyn crate::domains::tools::Tool>]);
        let gateway = Gateway::with_registry(Config::default(), registry);

        let out = gateway.call_tool("ping", &ToolArgs::new()).unwrap();
        assert_eq!(out.get("reply"), Some(&json!("pong")));
        assert!(matches!(
            gateway.call_tool("echo", &ToolArgs::new()),
            Err(ToolError::NotFound(_))
        ));
    }

    #[test]
    fn test_clones_share_registry() {
        let gateway = Gateway::new(Config::default());
        let clone = gateway.clone();
        assert!(Arc::ptr_eq(gateway.registry(), clone.registry()));
    }
}
