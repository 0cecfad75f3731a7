//! plan MCP Tool
//!
//! Initializes or reconfigures a project for spec-driven development. Runs in
//! any project state; the detected state tells the agent which path to take.

use super::{enum_property, get_optional_enum, ToolContext, ToolDefinition};
use crate::services::{format_workflow_response, StateSummary};
use crate::Result;
use serde_json::{json, Value};

const PROJECT_TYPES: &[&str] = &["new", "existing", "reconfigure"];

/// Get the tool definition for plan
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "plan".to_string(),
        description: "Initialize or configure a project for spec-driven development".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "project_type": enum_property(PROJECT_TYPES, "Type of project setup"),
                "project_name": {
                    "type": "string",
                    "description": "Name of the product/project"
                },
                "mission": {
                    "type": "string",
                    "description": "1-3 sentence mission statement"
                },
                "tech_stack": {
                    "type": "string",
                    "description": "Technologies and frameworks used"
                },
                "roadmap": {
                    "type": "string",
                    "description": "Features to implement by timeline"
                }
            }
        }),
    }
}

/// Execute the plan tool
pub fn execute(args: &Value, ctx: &ToolContext) -> Result<String> {
    get_optional_enum(args, "project_type", PROJECT_TYPES)?;

    let workflow = ctx.workflow("plan")?;
    let state = ctx.detector().detect();
    let summary = StateSummary::new(state.name(), state.describe());

    Ok(format_workflow_response("plan", &workflow, &summary, args))
}
