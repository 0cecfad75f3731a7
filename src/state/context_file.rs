//! ContextReader - `.github/context.md` parsing
//!
//! The file is written by the agent while it works; this side only reads it.
//!
//! ```text
//! ACTIVE_SPEC: SPEC-20240101-login
//! LAST_UPDATED: 2024-01-01
//! PROJECT_STATE: developing
//! ```

use super::CONTEXT_FILE;
use crate::models::{LifecycleMarker, ProjectContext, NO_ACTIVE_SPEC};
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::warn;

const ACTIVE_SPEC_KEY: &str = "ACTIVE_SPEC:";
const LAST_UPDATED_KEY: &str = "LAST_UPDATED:";
const PROJECT_STATE_KEY: &str = "PROJECT_STATE:";

#[derive(Debug, Clone)]
pub struct ContextReader {
    context_path: PathBuf,
}

impl ContextReader {
    pub fn new(project_root: &Path) -> Self {
        Self {
            context_path: project_root.join(CONTEXT_FILE),
        }
    }

    pub fn context_path(&self) -> &Path {
        &self.context_path
    }

    /// Read the context record. `None` when the file is missing or unreadable.
    pub fn read(&self) -> Option<ProjectContext> {
        if !self.context_path.exists() {
            return None;
        }

        match std::fs::read_to_string(&self.context_path) {
            Ok(content) => Some(parse_context(&content)),
            Err(e) => {
                warn!(path = %self.context_path.display(), error = %e, "failed to read context file");
                None
            }
        }
    }

    pub fn has_active_spec(&self) -> bool {
        self.read().is_some_and(|context| context.has_active_spec())
    }

    /// Active spec folder, or `None` for the `"none"` sentinel or no context
    pub fn active_spec(&self) -> Option<String> {
        self.read()
            .and_then(|context| context.active_spec().map(str::to_string))
    }
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Parse the `KEY: value` lines of a context record, filling defaults for
/// anything missing.
pub fn parse_context(content: &str) -> ProjectContext {
    let mut active_spec = NO_ACTIVE_SPEC.to_string();
    let mut last_updated = today();
    let mut project_state = LifecycleMarker::default();

    for line in content.lines() {
        if let Some(value) = line.strip_prefix(ACTIVE_SPEC_KEY) {
            let value = value.trim();
            active_spec = if value.is_empty() {
                NO_ACTIVE_SPEC.to_string()
            } else {
                value.to_string()
            };
        } else if let Some(value) = line.strip_prefix(LAST_UPDATED_KEY) {
            let value = value.trim();
            last_updated = if value.is_empty() {
                today()
            } else {
                value.to_string()
            };
        } else if let Some(value) = line.strip_prefix(PROJECT_STATE_KEY) {
            if let Some(marker) = LifecycleMarker::parse(value.trim()) {
                project_state = marker;
            }
        }
    }

    ProjectContext {
        active_spec,
        last_updated,
        project_state,
    }
}
