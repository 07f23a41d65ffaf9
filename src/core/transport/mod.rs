//! Transport layer for the gateway.
//!
//! The gateway speaks a small REST protocol over HTTP (see `http`). The
//! transport owns socket binding, routing and JSON encoding; everything it
//! serves is delegated to [`crate::core::Gateway`].

mod config;
mod error;
mod service;

pub mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
