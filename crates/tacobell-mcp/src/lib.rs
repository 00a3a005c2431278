//! MCP tool server exposing the Taco Bell store locator and menu.

pub mod dispatch;
pub mod server;
pub mod tools;

pub use dispatch::dispatch;
pub use server::TacoBellServer;
pub use tools::{tool_definitions, ToolName};
