//! implement MCP Tool

use super::{
    enum_property, get_optional_bool, get_optional_enum, get_optional_string, ToolContext,
    ToolDefinition,
};
use crate::services::{format_workflow_response, StateSummary};
use crate::Result;
use serde_json::{json, Value};

const APPROACHES: &[&str] = &["careful", "fast", "interactive"];

/// Get the tool definition for implement
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "implement".to_string(),
        description: "Execute tasks with progress tracking".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "task_id": {
                    "type": "string",
                    "description": "Specific task number or \"next\" for next uncompleted"
                },
                "approach": enum_property(APPROACHES, "Implementation approach"),
                "continue": {
                    "type": "boolean",
                    "description": "Whether to automatically proceed to next task"
                }
            }
        }),
    }
}

/// Execute the implement tool
pub fn execute(args: &Value, ctx: &ToolContext) -> Result<String> {
    get_optional_enum(args, "approach", APPROACHES)?;
    get_optional_bool(args, "continue")?;
    if let Some(task_id) = get_optional_string(args, "task_id") {
        if task_id.trim().is_empty() {
            anyhow::bail!("task_id must not be empty");
        }
    }

    let Some(active_spec) = ctx.context_reader().active_spec() else {
        anyhow::bail!("No active spec found. Please run /create-spec first.");
    };

    let workflow = ctx.workflow("implement")?;
    let summary = StateSummary::new("DEVELOPING", "Ready for task implementation")
        .with_active_spec(Some(active_spec));

    Ok(format_workflow_response("implement", &workflow, &summary, args))
}
