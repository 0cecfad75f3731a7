// sdd-mcp - Spec-driven Development workflows over MCP
// Serves command workflow documents, merged with detected project state, to coding agents

pub mod cli;
pub mod context;
pub mod mcp;
pub mod models;
pub mod parser;
pub mod services;
pub mod state;

pub use anyhow::{Context, Result};

// Re-export commonly used types
pub use models::{ProjectContext, ProjectState, WorkflowDefinition};
pub use parser::WorkflowParser;
pub use services::WorkflowLoader;
pub use state::{ContextReader, ProjectStateDetector};
