//! context-docs MCP Tool
//!
//! Tells the agent which project documents to pull into context: the
//! foundation set always, technical documents only when the intent touches
//! their area, and the active spec's documents when one is selected.

use super::{get_optional_string, ToolContext, ToolDefinition};
use crate::context::{document_path, foundation_documents, relevant_docs};
use crate::models::{DocumentMetadata, FetchRule};
use crate::state::ProjectStateDetector;
use crate::Result;
use serde_json::{json, Value};
use std::fmt::Write as _;

/// Get the tool definition for context-docs
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "context-docs".to_string(),
        description: "List the project documents to load for a task".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "intent": {
                    "type": "string",
                    "description": "What the user wants to do, in their own words"
                }
            }
        }),
    }
}

fn document_line(doc: &DocumentMetadata, path: &str, detector: &ProjectStateDetector) -> String {
    let status = if detector.project_root().join(path).exists() {
        "present"
    } else {
        "missing"
    };
    format!("- `{}` ({}): {}\n", path, status, doc.description)
}

/// Execute the context-docs tool
pub fn execute(args: &Value, ctx: &ToolContext) -> Result<String> {
    let intent = get_optional_string(args, "intent").unwrap_or_default();
    let detector = ctx.detector();
    let mut out = String::from("# Context Documents\n\n## Always Fetch\n");

    for doc in foundation_documents() {
        out.push_str(&document_line(doc, doc.path, detector));
    }

    out.push_str("\n## Relevant to Intent\n");
    let relevant = relevant_docs(&intent);
    if relevant.is_empty() {
        out.push_str("No additional technical docs needed\n");
    }
    for doc in relevant {
        out.push_str(&document_line(doc, doc.path, detector));
    }

    if let Some(spec) = ctx.context_reader().active_spec() {
        writeln!(out, "\n## Active Spec: {}", spec)?;
        for doc in crate::context::DOCUMENTS
            .iter()
            .filter(|doc| doc.fetch_rule == FetchRule::SpecSpecific)
        {
            if let Some(path) = document_path(doc.name, Some(spec.as_str())) {
                out.push_str(&document_line(doc, &path, detector));
            }
        }
    }

    Ok(out)
}
