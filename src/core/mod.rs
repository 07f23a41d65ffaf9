//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the gateway,
//! including error handling, configuration, the gateway handle and the HTTP
//! transport.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::{API_PREFIX, API_VERSION, Gateway};
pub use transport::{HttpConfig, TransportService};
