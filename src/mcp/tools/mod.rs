//! MCP Tool Registry and Implementations
//!
//! Each command tool loads its workflow document, checks the project state it
//! needs, and returns the workflow formatted as instructions for the agent.

pub mod docs;
pub mod implement;
pub mod plan;
pub mod spec;
pub mod sync_docs;
pub mod tasks;

use crate::models::WorkflowDefinition;
use crate::services::WorkflowLoader;
use crate::state::{ContextReader, ProjectStateDetector};
use crate::Result;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Registry of available MCP tools
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
}

/// Tool definition for MCP protocol
#[derive(Clone)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// Everything a tool needs to answer a call
pub struct ToolContext {
    project_root: PathBuf,
    loader: WorkflowLoader,
    detector: ProjectStateDetector,
    context_reader: ContextReader,
}

impl ToolContext {
    pub fn new(project_root: impl Into<PathBuf>, loader: WorkflowLoader) -> Self {
        let project_root = project_root.into();
        Self {
            detector: ProjectStateDetector::new(&project_root),
            context_reader: ContextReader::new(&project_root),
            project_root,
            loader,
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn loader(&self) -> &WorkflowLoader {
        &self.loader
    }

    pub fn detector(&self) -> &ProjectStateDetector {
        &self.detector
    }

    pub fn context_reader(&self) -> &ContextReader {
        &self.context_reader
    }

    /// Load a command's workflow, turning a miss into a tool error
    pub fn workflow(&self, command_name: &str) -> Result<Arc<WorkflowDefinition>> {
        self.loader
            .load(command_name)
            .ok_or_else(|| anyhow::anyhow!("Could not load {} workflow definition", command_name))
    }
}

impl ToolRegistry {
    /// Create a new tool registry with all available tools
    pub fn new() -> Self {
        Self {
            tools: vec![
                plan::definition(),
                spec::definition(),
                tasks::definition(),
                implement::definition(),
                sync_docs::definition(),
                docs::definition(),
            ],
        }
    }

    /// List all available tools in MCP format
    pub fn list_tools(&self) -> Vec<Value> {
        self.tools
            .iter()
            .map(|t| {
                json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    /// Call a tool by name with the given arguments
    pub fn call_tool(&self, name: &str, arguments: &Value, ctx: &ToolContext) -> Result<String> {
        debug!(tool = name, %arguments, "calling tool");
        match name {
            "plan" => plan::execute(arguments, ctx),
            "create-spec" => spec::execute(arguments, ctx),
            "create-tasks" => tasks::execute(arguments, ctx),
            "implement" => implement::execute(arguments, ctx),
            "sync-docs" => sync_docs::execute(arguments, ctx),
            "context-docs" => docs::execute(arguments, ctx),
            _ => anyhow::bail!("Unknown tool: {}", name),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to extract a required string field from JSON
pub fn get_required_string(args: &Value, field: &str) -> Result<String> {
    args.get(field)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| anyhow::anyhow!("Missing required field: {}", field))
}

/// Helper to extract an optional string field from JSON
pub fn get_optional_string(args: &Value, field: &str) -> Option<String> {
    args.get(field).and_then(|v| v.as_str()).map(|s| s.to_string())
}

/// Helper to extract an optional boolean field from JSON
pub fn get_optional_bool(args: &Value, field: &str) -> Result<Option<bool>> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => anyhow::bail!("Field {} must be a boolean, got {}", field, other),
    }
}

/// Helper to extract an optional string restricted to `allowed` values
pub fn get_optional_enum(args: &Value, field: &str, allowed: &[&str]) -> Result<Option<String>> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if allowed.contains(&s.as_str()) => Ok(Some(s.clone())),
        Some(other) => anyhow::bail!(
            "Invalid value for {}: {}. Expected one of: {}",
            field,
            other,
            allowed.join(", ")
        ),
    }
}

/// Helper to extract an optional array whose items are restricted to `allowed`
pub fn get_optional_enum_array(
    args: &Value,
    field: &str,
    allowed: &[&str],
) -> Result<Option<Vec<String>>> {
    let items = match args.get(field) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(items)) => items,
        Some(other) => anyhow::bail!("Field {} must be an array, got {}", field, other),
    };

    items
        .iter()
        .map(|item| match item.as_str() {
            Some(s) if allowed.contains(&s) => Ok(s.to_string()),
            _ => anyhow::bail!(
                "Invalid item in {}: {}. Expected one of: {}",
                field,
                item,
                allowed.join(", ")
            ),
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

/// JSON schema for an optional string enum property
pub fn enum_property(allowed: &[&str], description: &str) -> Value {
    json!({
        "type": "string",
        "enum": allowed,
        "description": description
    })
}
