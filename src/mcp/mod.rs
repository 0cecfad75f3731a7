//! MCP (Model Context Protocol) Server for spec-driven development
//!
//! Serves each SDD command as a tool whose result is the command's workflow
//! document, merged with the current project state.
//!
//! ## Tools
//! - `plan` - Configure a project for spec-driven development
//! - `create-spec` - Turn requirements into a spec (configured projects only)
//! - `create-tasks` - Break the active spec into tasks
//! - `implement` - Work through the active spec's tasks
//! - `sync-docs` - Update project docs from completed work
//! - `context-docs` - Documents to load for a given intent

pub mod server;
pub mod tools;

pub use server::McpServer;
pub use tools::{ToolContext, ToolRegistry};
