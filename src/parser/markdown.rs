//! Heading-delimited section extraction
//!
//! Splits a workflow document into sections keyed by a normalized form of
//! the heading title. Heading levels are ignored and nothing is nested: every
//! heading closes the previous section.

use std::collections::HashMap;

/// Normalized section key -> trimmed section body
pub type SectionMap = HashMap<String, String>;

pub const GOAL: &str = "goal";
pub const USER_INTERACTION_FLOW: &str = "userInteractionFlow";
pub const INPUTS_REQUIRED: &str = "inputsRequired";
pub const OUTPUTS_GENERATED: &str = "outputsGenerated";
pub const INSTRUCTIONS: &str = "instructionsForCopilot";
pub const FILE_TEMPLATES: &str = "fileTemplates";
pub const ERROR_HANDLING: &str = "errorHandling";

/// Normalized heading forms that map onto named workflow fields
const SECTION_ALIASES: &[(&str, &str)] = &[
    ("userinteractionflow", USER_INTERACTION_FLOW),
    ("inputsrequired", INPUTS_REQUIRED),
    ("outputsgenerated", OUTPUTS_GENERATED),
    ("instructionsforcopilot", INSTRUCTIONS),
    ("filetemplates", FILE_TEMPLATES),
    ("errorhandlingandedgecases", ERROR_HANDLING),
];

/// Returns the heading title if `line` is a heading (`#`+ then whitespace).
fn heading_title(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches('#');
    let hashes = line.len() - rest.len();
    if hashes == 0 || !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim())
}

/// Convert a heading title into its section key.
///
/// Lowercases, keeps only ASCII letters and digits (whitespace is removed,
/// not collapsed), then rewrites the canonical aliases. Unknown titles keep
/// their normalized form.
///
/// # Example
/// ```
/// use sdd_mcp::parser::markdown::section_key;
/// assert_eq!(section_key("User Interaction Flow"), "userInteractionFlow");
/// assert_eq!(section_key("Notes & Caveats"), "notescaveats");
/// ```
pub fn section_key(title: &str) -> String {
    let normalized: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();

    SECTION_ALIASES
        .iter()
        .find(|(from, _)| *from == normalized)
        .map(|(_, to)| (*to).to_string())
        .unwrap_or(normalized)
}

/// Extract every section of `content`.
///
/// Text before the first heading is dropped, as are sections whose title is
/// empty. A repeated key keeps the body of its last occurrence.
pub fn extract_sections(content: &str) -> SectionMap {
    let mut sections = SectionMap::new();
    let mut current_title: Option<&str> = None;
    let mut current_body: Vec<&str> = Vec::new();

    for line in content.lines() {
        if let Some(title) = heading_title(line) {
            flush_section(&mut sections, current_title, &current_body);
            current_title = Some(title);
            current_body.clear();
        } else if current_title.is_some() {
            current_body.push(line);
        }
    }
    flush_section(&mut sections, current_title, &current_body);

    sections
}

fn flush_section(sections: &mut SectionMap, title: Option<&str>, body: &[&str]) {
    if let Some(title) = title.filter(|t| !t.is_empty()) {
        sections.insert(section_key(title), body.join("\n").trim().to_string());
    }
}

/// First paragraph of a section body, joined onto one line and truncated to
/// `max_chars` characters with an ellipsis
pub fn section_summary(body: &str, max_chars: usize) -> String {
    let mut paragraph = String::new();
    for line in body.lines().map(str::trim) {
        if line.is_empty() {
            break;
        }
        if !paragraph.is_empty() {
            paragraph.push(' ');
        }
        paragraph.push_str(line);
    }

    if paragraph.chars().count() > max_chars {
        let keep = max_chars.saturating_sub(3);
        let truncate_index = paragraph
            .char_indices()
            .nth(keep)
            .map(|(i, _)| i)
            .unwrap_or(paragraph.len());
        paragraph.truncate(truncate_index);
        paragraph.push_str("...");
    }

    paragraph
}
