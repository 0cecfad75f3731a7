//! Service layer
//!
//! Logic shared by the MCP tools and the CLI subcommands.

pub mod response;
pub mod workflow_loader;

pub use response::{format_workflow_response, StateSummary};
pub use workflow_loader::{WorkflowError, WorkflowLoader};
