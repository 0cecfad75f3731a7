//! Integration tests for project state detection, the context record and
//! the document fetch policy working against one project tree

use sdd_mcp::context::{relevant_docs, should_auto_fetch};
use sdd_mcp::models::{LifecycleMarker, ProjectState};
use sdd_mcp::{ContextReader, ProjectStateDetector};
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

#[test]
fn test_config_dir_only_is_partial() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join(".github")).unwrap();
    std::fs::create_dir_all(temp_dir.path().join("repos")).unwrap();

    let detector = ProjectStateDetector::new(temp_dir.path());
    let state = detector.detect();
    assert_eq!(state, ProjectState::Partial);
    assert!(!detector.is_ready());
    assert_eq!(
        state.describe(),
        "Partially configured - .github directory exists but missing product.md"
    );
}

#[test]
fn test_configured_wins_over_existing_code() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), ".github/product.md", "# Product");
    write(temp_dir.path(), "repos/backend/main.rs", "fn main() {}");

    let detector = ProjectStateDetector::new(temp_dir.path());
    assert_eq!(detector.detect(), ProjectState::Configured);
    assert!(detector.is_ready());
}

#[test]
fn test_lifecycle_of_a_project() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let detector = ProjectStateDetector::new(root);
    let reader = ContextReader::new(root);

    assert_eq!(detector.detect(), ProjectState::New);
    assert!(reader.read().is_none());

    write(root, "repos/legacy/app.py", "print('hi')");
    assert_eq!(detector.detect(), ProjectState::Existing);

    write(root, ".github/product.md", "# Product");
    write(
        root,
        ".github/context.md",
        "ACTIVE_SPEC: none\nLAST_UPDATED: 2024-03-01\nPROJECT_STATE: configured\n",
    );
    assert_eq!(detector.detect(), ProjectState::Configured);
    let context = reader.read().unwrap();
    assert_eq!(context.project_state, LifecycleMarker::Configured);
    assert!(!reader.has_active_spec());

    std::fs::create_dir_all(root.join("specs/SPEC-20240301-billing")).unwrap();
    write(
        root,
        ".github/context.md",
        "ACTIVE_SPEC: SPEC-20240301-billing\nLAST_UPDATED: 2024-03-02\nPROJECT_STATE: developing\n",
    );
    assert_eq!(reader.active_spec().as_deref(), Some("SPEC-20240301-billing"));
    assert!(detector.spec_exists("SPEC-20240301-billing"));
    assert_eq!(detector.available_specs(), vec!["SPEC-20240301-billing"]);
}

#[test]
fn test_context_without_active_spec_key() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), ".github/context.md", "PROJECT_STATE: documented\n");

    let reader = ContextReader::new(temp_dir.path());
    let context = reader.read().unwrap();
    assert_eq!(context.active_spec, "none");
    assert_eq!(context.project_state, LifecycleMarker::Documented);
    assert!(!reader.has_active_spec());
    assert_eq!(reader.active_spec(), None);
}

#[test]
fn test_fetch_policy_against_documents_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), ".github/product.md", "# Product");
    write(temp_dir.path(), ".github/docs/design.md", "# Design");

    let detector = ProjectStateDetector::new(temp_dir.path());
    assert!(should_auto_fetch("product.md"));
    assert!(detector.document_exists("product.md"));

    let docs: Vec<_> = relevant_docs("improve the UI component")
        .into_iter()
        .map(|doc| doc.name)
        .collect();
    assert!(docs.contains(&"design.md"));
    assert!(detector.document_exists("design.md"));
    assert!(!detector.document_exists("architecture.md"));
}
