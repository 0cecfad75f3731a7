//! ProjectStateDetector - lifecycle classification from filesystem evidence

use super::{CONFIG_DIR, FOUNDATION_DOC, LEGACY_CODE_DIR, SPECS_DIR, SPEC_PREFIX};
use crate::context::find_document;
use crate::models::ProjectState;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Classifies a project root. Never caches: every call looks at the disk.
#[derive(Debug, Clone)]
pub struct ProjectStateDetector {
    project_root: PathBuf,
}

impl ProjectStateDetector {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Detect the current state. First match wins:
    /// product.md → CONFIGURED, non-empty repos/ → EXISTING,
    /// .github/ → PARTIAL, otherwise NEW.
    pub fn detect(&self) -> ProjectState {
        let state = if self.project_root.join(FOUNDATION_DOC).exists() {
            ProjectState::Configured
        } else if self.has_legacy_code() {
            ProjectState::Existing
        } else if self.project_root.join(CONFIG_DIR).exists() {
            ProjectState::Partial
        } else {
            ProjectState::New
        };

        debug!(root = %self.project_root.display(), %state, "detected project state");
        state
    }

    /// Gate for commands that need a configured project
    pub fn is_ready(&self) -> bool {
        self.detect() == ProjectState::Configured
    }

    /// Description of the current state
    pub fn describe(&self) -> &'static str {
        self.detect().describe()
    }

    /// `repos/` exists as a directory with at least one entry
    fn has_legacy_code(&self) -> bool {
        let repos = self.project_root.join(LEGACY_CODE_DIR);
        match std::fs::read_dir(&repos) {
            Ok(mut entries) => entries.next().is_some(),
            Err(e) if is_absent_dir(&e) => false,
            Err(e) => {
                warn!(path = %repos.display(), error = %e, "cannot list legacy code directory");
                false
            }
        }
    }

    /// Spec folders under `specs/`, sorted by name
    pub fn available_specs(&self) -> Vec<String> {
        let specs_dir = self.project_root.join(SPECS_DIR);
        let entries = match std::fs::read_dir(&specs_dir) {
            Ok(entries) => entries,
            Err(e) => {
                if !is_absent_dir(&e) {
                    warn!(path = %specs_dir.display(), error = %e, "cannot list specs directory");
                }
                return Vec::new();
            }
        };

        let mut specs: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .filter(|name| name.starts_with(SPEC_PREFIX))
            .collect();
        specs.sort();
        specs
    }

    pub fn spec_exists(&self, spec_id: &str) -> bool {
        self.project_root.join(SPECS_DIR).join(spec_id).exists()
    }

    /// Whether a known document (e.g., "api.md") is present on disk.
    /// Unknown names are looked up directly under `.github/`.
    pub fn document_exists(&self, name: &str) -> bool {
        let relative = find_document(name)
            .map(|doc| PathBuf::from(doc.path))
            .unwrap_or_else(|| Path::new(CONFIG_DIR).join(name));
        self.project_root.join(relative).exists()
    }
}

/// A missing directory, or a plain file where a directory was expected
fn is_absent_dir(error: &std::io::Error) -> bool {
    matches!(
        error.kind(),
        std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory
    )
}
