//! create-tasks MCP Tool
//!
//! Breaks the active spec into implementable tasks.

use super::{enum_property, get_optional_enum, ToolContext, ToolDefinition};
use crate::models::ProjectState;
use crate::services::{format_workflow_response, StateSummary};
use crate::Result;
use serde_json::{json, Value};

const APPROACHES: &[&str] = &[
    "backend-first",
    "frontend-first",
    "full-stack-parallel",
    "risk-first",
];

const GRANULARITIES: &[&str] = &["fine", "medium", "coarse"];

/// Get the tool definition for create-tasks
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "create-tasks".to_string(),
        description: "Break specifications into implementable tasks".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "spec_folder": {
                    "type": "string",
                    "description": "Active spec or user-specified SPEC-YYYYMMDD-slug"
                },
                "implementation_approach": enum_property(APPROACHES, "Implementation strategy"),
                "task_granularity": enum_property(
                    GRANULARITIES,
                    "Task size: fine (30min-2hr), medium (2-4hr), coarse (4-8hr)"
                )
            }
        }),
    }
}

/// Execute the create-tasks tool
pub fn execute(args: &Value, ctx: &ToolContext) -> Result<String> {
    get_optional_enum(args, "implementation_approach", APPROACHES)?;
    get_optional_enum(args, "task_granularity", GRANULARITIES)?;

    let Some(active_spec) = ctx.context_reader().active_spec() else {
        anyhow::bail!(
            "No active spec found. Please run /create-spec first to create a specification."
        );
    };

    let workflow = ctx.workflow("create-tasks")?;
    let summary = StateSummary::new(ProjectState::Configured.name(), ctx.detector().describe())
        .with_active_spec(Some(active_spec))
        .with_available_specs(ctx.detector().available_specs());

    Ok(format_workflow_response("create-tasks", &workflow, &summary, args))
}
