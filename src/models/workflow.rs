use serde::{Deserialize, Serialize};

/// Parsed, typed form of a command's workflow document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDefinition {
    /// Command name the document was resolved from (e.g., "plan")
    pub name: String,

    /// Body of the "Goal" section
    pub goal: String,

    /// Items of the "User Interaction Flow" list
    pub user_interaction_flow: Vec<String>,

    /// Items of the "Inputs Required" list
    pub inputs_required: Vec<String>,

    /// Items of the "Outputs Generated" list
    pub outputs_generated: Vec<String>,

    /// Body of "Instructions for Copilot", the operative payload
    pub instructions: String,

    /// Body of "File Templates" (empty when absent)
    pub file_templates: String,

    /// Body of "Error Handling and Edge Cases" (empty when absent)
    pub error_handling: String,

    /// Verbatim source text
    pub full_content: String,
}

impl WorkflowDefinition {
    pub fn new(name: impl Into<String>, full_content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_content: full_content.into(),
            ..Default::default()
        }
    }

    /// True when the parser found nothing structured and callers should
    /// fall back to displaying `full_content`
    pub fn is_unstructured(&self) -> bool {
        self.goal.is_empty()
            && self.instructions.is_empty()
            && self.user_interaction_flow.is_empty()
            && self.inputs_required.is_empty()
            && self.outputs_generated.is_empty()
    }
}
