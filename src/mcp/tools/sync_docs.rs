//! sync-docs MCP Tool
//!
//! Updates project documentation from completed work. No state gate.

use super::{enum_property, get_optional_enum, get_optional_enum_array, ToolContext, ToolDefinition};
use crate::services::{format_workflow_response, StateSummary};
use crate::Result;
use serde_json::{json, Value};

const SCOPES: &[&str] = &["current-spec", "all-completed", "specific-file"];
const DOC_TARGETS: &[&str] = &["api", "database", "architecture", "design"];
const UPDATE_MODES: &[&str] = &["append", "merge", "regenerate"];

/// Get the tool definition for sync-docs
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "sync-docs".to_string(),
        description: "Update project documentation based on completed work".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "scope": enum_property(SCOPES, "Documentation update scope"),
                "doc_targets": {
                    "type": "array",
                    "items": { "type": "string", "enum": DOC_TARGETS },
                    "description": "Which docs to update"
                },
                "update_mode": enum_property(UPDATE_MODES, "How to handle updates")
            }
        }),
    }
}

/// Execute the sync-docs tool
pub fn execute(args: &Value, ctx: &ToolContext) -> Result<String> {
    get_optional_enum(args, "scope", SCOPES)?;
    get_optional_enum_array(args, "doc_targets", DOC_TARGETS)?;
    get_optional_enum(args, "update_mode", UPDATE_MODES)?;

    let workflow = ctx.workflow("sync-docs")?;
    let summary = StateSummary::new("DOCUMENTED", "Ready for documentation sync")
        .with_active_spec(ctx.context_reader().active_spec())
        .with_available_specs(ctx.detector().available_specs());

    Ok(format_workflow_response("sync-docs", &workflow, &summary, args))
}
