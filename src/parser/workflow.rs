//! Workflow document parser
//!
//! Turns a command's markdown document into a [`WorkflowDefinition`]. Parsing
//! is total: anything the parser does not recognize degrades to empty fields,
//! and the verbatim text is always kept in `full_content`.

use super::markdown::{
    extract_sections, SectionMap, ERROR_HANDLING, FILE_TEMPLATES, GOAL, INPUTS_REQUIRED,
    INSTRUCTIONS, OUTPUTS_GENERATED, USER_INTERACTION_FLOW,
};
use crate::models::WorkflowDefinition;
use regex::Regex;
use std::sync::LazyLock;

/// Leading run of whitespace, bullets, ASCII digits and dots
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s\-0-9.]+").expect("list marker pattern is valid"));

// `\d` would also match non-ASCII decimal digits
static ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.").expect("ordinal pattern is valid"));

pub struct WorkflowParser;

impl WorkflowParser {
    /// Parse `content` as the workflow for command `name`
    pub fn parse(name: &str, content: &str) -> WorkflowDefinition {
        let sections = extract_sections(content);

        WorkflowDefinition {
            name: name.to_string(),
            goal: text_section(&sections, GOAL),
            user_interaction_flow: parse_list_section(section(&sections, USER_INTERACTION_FLOW)),
            inputs_required: parse_list_section(section(&sections, INPUTS_REQUIRED)),
            outputs_generated: parse_list_section(section(&sections, OUTPUTS_GENERATED)),
            instructions: text_section(&sections, INSTRUCTIONS),
            file_templates: text_section(&sections, FILE_TEMPLATES),
            error_handling: text_section(&sections, ERROR_HANDLING),
            full_content: content.to_string(),
        }
    }
}

fn section<'a>(sections: &'a SectionMap, key: &str) -> &'a str {
    sections.get(key).map(String::as_str).unwrap_or("")
}

fn text_section(sections: &SectionMap, key: &str) -> String {
    section(sections, key).to_string()
}

/// Items of a bulleted (`-`) or numbered (`1.`) list, in document order.
///
/// Lines without a list marker are dropped, as are items that are empty once
/// the marker is stripped.
pub fn parse_list_section(body: &str) -> Vec<String> {
    body.lines()
        .filter(|line| {
            let trimmed = line.trim();
            trimmed.starts_with('-') || ORDINAL.is_match(trimmed)
        })
        .map(|line| LIST_MARKER.replace(line, "").trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
