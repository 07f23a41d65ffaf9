//! Kitz Tool Gateway library.
//!
//! A local HTTP gateway exposing a fixed catalog of named, stateless tools
//! over a small REST protocol, so that callers can discover and invoke them
//! by name without per-tool client code.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the [`Gateway`] handle and the
//!   HTTP transport
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the `Tool` trait, built-in tools and the `ToolRegistry`
//!
//! # Example
//!
//! ```rust,no_run
//! use kitz_gateway::{Config, Gateway, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let transport = TransportService::new(config.transport.clone());
//!     transport.run(Gateway::new(config)).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, Gateway, Result, TransportService};
pub use crate::domains::tools::{Tool, ToolError, ToolRegistry};
