//! Built-in tool definitions.
//!
//! Each tool is defined in its own file.

mod echo;
mod sum;
mod utc_now;

pub use echo::EchoTool;
pub use sum::SumTool;
pub use utc_now::UtcNowTool;
