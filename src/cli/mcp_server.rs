//! serve CLI subcommand
//!
//! Starts the MCP server. The server communicates via JSON-RPC 2.0 over
//! stdio, so nothing else may write to stdout while it runs.

use super::Settings;
use crate::mcp::McpServer;
use crate::Result;

/// Run the MCP server
pub async fn run(settings: &Settings) -> Result<()> {
    let server = McpServer::new(&settings.config.server_name, settings.tool_context());
    server.run().await
}
