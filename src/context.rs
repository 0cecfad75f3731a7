//! Document fetch policy
//!
//! Which project documents an agent should pull into its context, and when.
//! Foundation documents are fetched on every task; technical documents only
//! when the user's intent touches their area.

use crate::models::{DocumentCategory, DocumentMetadata, FetchRule};

const fn doc(
    name: &'static str,
    path: &'static str,
    category: DocumentCategory,
    fetch_rule: FetchRule,
    description: &'static str,
) -> DocumentMetadata {
    DocumentMetadata {
        name,
        path,
        category,
        fetch_rule,
        description,
    }
}

/// Every document the policy knows about, in declaration order
pub const DOCUMENTS: &[DocumentMetadata] = &[
    doc(
        "product.md",
        ".github/product.md",
        DocumentCategory::Foundation,
        FetchRule::Always,
        "Product vision, mission and target users",
    ),
    doc(
        "best-practices.md",
        ".github/best-practices.md",
        DocumentCategory::Foundation,
        FetchRule::Always,
        "Coding standards and conventions for the project",
    ),
    doc(
        "roadmap.md",
        ".github/roadmap.md",
        DocumentCategory::Foundation,
        FetchRule::Always,
        "Planned features by timeline",
    ),
    doc(
        "api.md",
        ".github/docs/api.md",
        DocumentCategory::Technical,
        FetchRule::OnDemand,
        "API endpoints, authentication and routing",
    ),
    doc(
        "database.md",
        ".github/docs/database.md",
        DocumentCategory::Technical,
        FetchRule::OnDemand,
        "Database schema and data models",
    ),
    doc(
        "architecture.md",
        ".github/docs/architecture.md",
        DocumentCategory::Technical,
        FetchRule::OnDemand,
        "System architecture and design decisions",
    ),
    doc(
        "design.md",
        ".github/docs/design.md",
        DocumentCategory::Technical,
        FetchRule::OnDemand,
        "UI design system, components and styling",
    ),
    doc(
        "spec.md",
        "specs/{spec}/spec.md",
        DocumentCategory::Spec,
        FetchRule::SpecSpecific,
        "Requirements of the active spec",
    ),
    doc(
        "tasks.md",
        "specs/{spec}/tasks.md",
        DocumentCategory::Spec,
        FetchRule::SpecSpecific,
        "Task breakdown and progress of the active spec",
    ),
    doc(
        "code-analysis.md",
        ".github/code-analysis.md",
        DocumentCategory::Legacy,
        FetchRule::NeverRefetch,
        "One-time analysis of pre-existing code",
    ),
];

/// Intent keywords and the on-demand document they pull in.
///
/// Evaluated in order; "component" appears in two rules on purpose and
/// surfaces both documents.
const RELEVANCE_RULES: &[(&[&str], &str)] = &[
    (&["api", "endpoint", "auth", "route"], "api.md"),
    (&["database", "schema", "model", "data"], "database.md"),
    (
        &["architecture", "system", "component", "design decision"],
        "architecture.md",
    ),
    (&["ui", "design", "component", "styling"], "design.md"),
];

pub fn find_document(name: &str) -> Option<&'static DocumentMetadata> {
    DOCUMENTS.iter().find(|doc| doc.name == name)
}

fn documents_with_rule(rule: FetchRule) -> Vec<&'static DocumentMetadata> {
    DOCUMENTS.iter().filter(|doc| doc.fetch_rule == rule).collect()
}

/// Documents fetched on every task
pub fn foundation_documents() -> Vec<&'static DocumentMetadata> {
    documents_with_rule(FetchRule::Always)
}

/// Documents fetched only when relevant to the task
pub fn on_demand_documents() -> Vec<&'static DocumentMetadata> {
    documents_with_rule(FetchRule::OnDemand)
}

/// True only for documents whose rule is `always`; unknown names are false
pub fn should_auto_fetch(name: &str) -> bool {
    find_document(name).is_some_and(|doc| doc.fetch_rule == FetchRule::Always)
}

/// On-demand documents relevant to free-text user intent.
///
/// Case-insensitive substring match against each rule's keywords. The
/// result follows rule order and is not deduplicated.
pub fn relevant_docs(intent: &str) -> Vec<&'static DocumentMetadata> {
    let intent = intent.to_lowercase();

    RELEVANCE_RULES
        .iter()
        .filter(|(keywords, _)| keywords.iter().any(|keyword| intent.contains(keyword)))
        .filter_map(|(_, name)| find_document(name))
        .collect()
}

/// Concrete path of a spec-specific document for `spec_id`.
/// Other documents resolve to their fixed path.
pub fn document_path(name: &str, spec_id: Option<&str>) -> Option<String> {
    let doc = find_document(name)?;
    match (doc.fetch_rule, spec_id) {
        (FetchRule::SpecSpecific, Some(spec)) => Some(doc.path.replace("{spec}", spec)),
        (FetchRule::SpecSpecific, None) => None,
        _ => Some(doc.path.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(docs: &[&DocumentMetadata]) -> Vec<&'static str> {
        docs.iter().map(|doc| doc.name).collect()
    }

    #[test]
    fn test_foundation_documents_in_table_order() {
        assert_eq!(
            names(&foundation_documents()),
            vec!["product.md", "best-practices.md", "roadmap.md"]
        );
        assert!(foundation_documents()
            .iter()
            .all(|doc| doc.category == DocumentCategory::Foundation));
    }

    #[test]
    fn test_on_demand_documents_in_table_order() {
        assert_eq!(
            names(&on_demand_documents()),
            vec!["api.md", "database.md", "architecture.md", "design.md"]
        );
    }

    #[test]
    fn test_should_auto_fetch() {
        assert!(should_auto_fetch("product.md"));
        assert!(should_auto_fetch("best-practices.md"));
        assert!(!should_auto_fetch("api.md"));
        assert!(!should_auto_fetch("code-analysis.md"));
        assert!(!should_auto_fetch("spec.md"));
        assert!(!should_auto_fetch("unknown.md"));
    }

    #[test]
    fn test_relevant_docs_single_area() {
        assert_eq!(
            names(&relevant_docs("Help me implement user AUTHENTICATION")),
            vec!["api.md"]
        );
        assert_eq!(
            names(&relevant_docs("Need to update the database schema")),
            vec!["database.md"]
        );
    }

    #[test]
    fn test_relevant_docs_shared_component_keyword() {
        let docs = names(&relevant_docs("improve the UI component"));
        assert!(docs.contains(&"design.md"));
        // "component" belongs to both the architecture and design rules
        assert_eq!(docs, vec!["architecture.md", "design.md"]);
    }

    #[test]
    fn test_relevant_docs_rule_order_not_input_order() {
        let docs = names(&relevant_docs("styling for the api"));
        assert_eq!(docs, vec!["api.md", "design.md"]);
    }

    #[test]
    fn test_relevant_docs_no_match() {
        assert!(relevant_docs("write release notes").is_empty());
        assert!(relevant_docs("").is_empty());
    }

    #[test]
    fn test_document_path() {
        assert_eq!(
            document_path("tasks.md", Some("SPEC-20240101-login")).as_deref(),
            Some("specs/SPEC-20240101-login/tasks.md")
        );
        assert_eq!(document_path("tasks.md", None), None);
        assert_eq!(
            document_path("api.md", Some("ignored")).as_deref(),
            Some(".github/docs/api.md")
        );
        assert_eq!(document_path("missing.md", None), None);
    }
}
