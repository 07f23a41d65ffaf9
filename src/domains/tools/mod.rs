//! Tools domain module.
//!
//! This module handles all tool-related functionality for the gateway.
//! Tools are named, stateless functions from an argument map to a result map
//! that clients discover and invoke over HTTP.
//!
//! ## Architecture
//!
//! - `definitions/` - Built-in tool implementations (one file per tool)
//! - `handlers.rs` - The `Tool` trait and the closure-backed `FnTool`
//! - `registry.rs` - Central tool registry and dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Implement the `Tool` trait
//! 3. Export in `definitions/mod.rs`
//! 4. Add it to `default_tools()` in `registry.rs`

pub mod definitions;
mod error;
mod handlers;
mod registry;

pub use error::ToolError;
pub use handlers::{FnTool, Tool, ToolArgs, ToolOutput, ToolSummary};
pub use registry::{ToolRegistry, default_tools};
