//! Domains module containing business logic organized by bounded contexts.
//!
//! The gateway currently has a single domain: the tool catalog and its
//! invocation rules. The HTTP surface lives in `core::transport`.

pub mod tools;
