//! create-spec MCP Tool
//!
//! Turns user requirements into a spec folder. Needs a configured project.

use super::{get_required_string, ToolContext, ToolDefinition};
use crate::models::ProjectState;
use crate::services::{format_workflow_response, StateSummary};
use crate::Result;
use serde_json::{json, Value};

/// Get the tool definition for create-spec
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "create-spec".to_string(),
        description: "Transform user requirements into structured specifications".to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["feature_name", "problem_statement"],
            "properties": {
                "feature_name": {
                    "type": "string",
                    "description": "Short descriptive name for the feature"
                },
                "problem_statement": {
                    "type": "string",
                    "description": "What problem this solves"
                },
                "user_stories": {
                    "type": "string",
                    "description": "Who needs this and why"
                },
                "acceptance_criteria": {
                    "type": "string",
                    "description": "How we know it is working"
                },
                "technical_scope": {
                    "type": "string",
                    "description": "High level overview of project parts affected"
                }
            }
        }),
    }
}

/// Execute the create-spec tool
pub fn execute(args: &Value, ctx: &ToolContext) -> Result<String> {
    get_required_string(args, "feature_name")?;
    get_required_string(args, "problem_statement")?;

    let detector = ctx.detector();
    if !detector.is_ready() {
        anyhow::bail!(
            "Project is not configured for spec-driven development. Please run /plan first.\n\nCurrent state: {}",
            detector.describe()
        );
    }

    let workflow = ctx.workflow("create-spec")?;
    let summary = StateSummary::new(ProjectState::Configured.name(), detector.describe())
        .with_active_spec(ctx.context_reader().active_spec())
        .with_available_specs(detector.available_specs());

    Ok(format_workflow_response("create-spec", &workflow, &summary, args))
}
