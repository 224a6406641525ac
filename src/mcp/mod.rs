//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes extraction to AI assistants as MCP tools over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameters and result DTOs

mod server;
pub mod types;

pub use server::{SheetliftMcpServer, run_server};
