//! Response formatter - merges a workflow with project facts into the text
//! returned to the calling agent

use crate::models::WorkflowDefinition;
use serde_json::Value;

/// Project facts shown in the "Current Project State" block
#[derive(Debug, Clone, Default)]
pub struct StateSummary {
    /// State label (e.g., "CONFIGURED", "DEVELOPING")
    pub state: String,
    pub description: String,
    pub active_spec: Option<String>,
    pub available_specs: Vec<String>,
}

impl StateSummary {
    pub fn new(state: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_active_spec(mut self, active_spec: Option<String>) -> Self {
        self.active_spec = active_spec;
        self
    }

    pub fn with_available_specs(mut self, specs: Vec<String>) -> Self {
        self.available_specs = specs;
        self
    }
}

/// Render a workflow as instructions for the agent.
///
/// Optional blocks (inputs, templates, error handling) are left out when
/// empty. When the document had no recognizable structure the raw text is
/// shown in place of the instructions.
pub fn format_workflow_response(
    command_name: &str,
    workflow: &WorkflowDefinition,
    summary: &StateSummary,
    provided_inputs: &Value,
) -> String {
    let mut out = format!("# {} Command Workflow\n\n", command_name.to_uppercase());

    out.push_str("## Current Project State\n");
    out.push_str(&format!("- **State**: {}\n", summary.state));
    out.push_str(&format!("- **Description**: {}\n", summary.description));
    if let Some(spec) = &summary.active_spec {
        out.push_str(&format!("- **Active Spec**: {}\n", spec));
    }
    if !summary.available_specs.is_empty() {
        out.push_str(&format!(
            "- **Available Specs**: {}\n",
            summary.available_specs.join(", ")
        ));
    }
    out.push('\n');

    out.push_str(&format!("## Goal\n{}\n\n", workflow.goal));

    if let Some(inputs) = provided_inputs.as_object().filter(|o| !o.is_empty()) {
        let pretty = serde_json::to_string_pretty(inputs).unwrap_or_else(|_| "{}".to_string());
        out.push_str(&format!("## User Provided Inputs\n{}\n\n", pretty));
    }

    let instructions = if workflow.is_unstructured() {
        &workflow.full_content
    } else {
        &workflow.instructions
    };
    out.push_str(&format!("## Instructions to Execute\n{}\n\n", instructions));

    if !workflow.file_templates.is_empty() {
        out.push_str(&format!("## File Templates\n{}\n\n", workflow.file_templates));
    }

    if !workflow.error_handling.is_empty() {
        out.push_str(&format!("## Error Handling\n{}\n\n", workflow.error_handling));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::WorkflowParser;
    use serde_json::json;

    fn workflow() -> WorkflowDefinition {
        WorkflowParser::parse(
            "create-tasks",
            "## Goal\nBreak the spec down\n## Instructions for Copilot\nWrite tasks.md\n## File Templates\n```md\n# Tasks\n```\n",
        )
    }

    #[test]
    fn test_sections_in_order() {
        let summary = StateSummary::new("CONFIGURED", "Configured for spec-driven development")
            .with_active_spec(Some("SPEC-20240101-login".to_string()))
            .with_available_specs(vec!["SPEC-20240101-login".to_string()]);
        let text = format_workflow_response(
            "create-tasks",
            &workflow(),
            &summary,
            &json!({"task_granularity": "fine"}),
        );

        assert!(text.starts_with("# CREATE-TASKS Command Workflow\n\n## Current Project State\n"));
        assert!(text.contains("- **State**: CONFIGURED\n"));
        assert!(text.contains("- **Active Spec**: SPEC-20240101-login\n"));
        assert!(text.contains("- **Available Specs**: SPEC-20240101-login\n"));

        let goal = text.find("## Goal\nBreak the spec down").unwrap();
        let inputs = text.find("## User Provided Inputs\n{\n  \"task_granularity\": \"fine\"\n}").unwrap();
        let instructions = text.find("## Instructions to Execute\nWrite tasks.md").unwrap();
        let templates = text.find("## File Templates\n```md").unwrap();
        assert!(goal < inputs && inputs < instructions && instructions < templates);
        assert!(!text.contains("## Error Handling"));
    }

    #[test]
    fn test_empty_inputs_are_omitted() {
        let summary = StateSummary::new("NEW", "New project");
        let text = format_workflow_response("plan", &workflow(), &summary, &json!({}));
        assert!(!text.contains("User Provided Inputs"));
        assert!(!text.contains("Active Spec"));
        assert!(!text.contains("Available Specs"));

        let text = format_workflow_response("plan", &workflow(), &summary, &Value::Null);
        assert!(!text.contains("User Provided Inputs"));
    }

    #[test]
    fn test_unstructured_document_falls_back_to_raw_text() {
        let raw = WorkflowParser::parse("implement", "Just do the next task.");
        let summary = StateSummary::new("DEVELOPING", "Ready for task implementation");
        let text = format_workflow_response("implement", &raw, &summary, &json!({}));
        assert!(text.contains("## Instructions to Execute\nJust do the next task.\n"));
    }
}
