//! Workflow loader - resolves command names to parsed workflow documents
//!
//! Each document is read and parsed once per loader; later calls return the
//! cached `Arc`. Edits to a document after its first load are not observed.
//!
//! The documents in `commands/` are also compiled into the binary. A loader
//! built with [`WorkflowLoader::with_bundled_fallback`] serves them when the
//! directory has no document of that name, so a relocated binary still works.

use crate::models::WorkflowDefinition;
use crate::parser::WorkflowParser;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, warn};

/// Prefixes of reference documents that share the commands directory
const NON_COMMAND_PREFIXES: &[&str] = &["COMMAND_", "WORKFLOW_"];

/// Command documents embedded at build time
const BUNDLED_WORKFLOWS: &[(&str, &str)] = &[
    ("plan", include_str!("../../commands/plan.md")),
    ("create-spec", include_str!("../../commands/create-spec.md")),
    ("create-tasks", include_str!("../../commands/create-tasks.md")),
    ("implement", include_str!("../../commands/implement.md")),
    ("sync-docs", include_str!("../../commands/sync-docs.md")),
];

/// Embedded document for `command_name`, if one ships with the binary
pub fn bundled_workflow(command_name: &str) -> Option<&'static str> {
    BUNDLED_WORKFLOWS
        .iter()
        .find(|(name, _)| *name == command_name)
        .map(|(_, content)| *content)
}

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Workflow document not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read workflow document '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub struct WorkflowLoader {
    commands_dir: PathBuf,
    bundled_fallback: bool,
    cache: Mutex<HashMap<String, Arc<WorkflowDefinition>>>,
}

impl WorkflowLoader {
    pub fn new(commands_dir: impl Into<PathBuf>) -> Self {
        Self {
            commands_dir: commands_dir.into(),
            bundled_fallback: false,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Serve the embedded documents for names missing from the directory
    pub fn with_bundled_fallback(mut self) -> Self {
        self.bundled_fallback = true;
        self
    }

    pub fn commands_dir(&self) -> &Path {
        &self.commands_dir
    }

    /// Load the workflow for `command_name`.
    ///
    /// A missing document and an unreadable one both yield `None`; the
    /// latter is logged.
    pub fn load(&self, command_name: &str) -> Option<Arc<WorkflowDefinition>> {
        match self.try_load(command_name) {
            Ok(workflow) => Some(workflow),
            Err(WorkflowError::NotFound { path }) => {
                debug!(command = command_name, path = %path.display(), "no workflow document");
                None
            }
            Err(e) => {
                warn!(command = command_name, error = %e, "failed to load workflow");
                None
            }
        }
    }

    /// Load with the failure reason kept
    pub fn try_load(&self, command_name: &str) -> Result<Arc<WorkflowDefinition>, WorkflowError> {
        // Inserts are single calls, so a poisoned map is still consistent
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(workflow) = cache.get(command_name) {
            debug!(command = command_name, "workflow cache hit");
            return Ok(Arc::clone(workflow));
        }

        let path = self.document_path(command_name);
        let workflow = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|source| WorkflowError::Io { path: path.clone(), source })?;
            debug!(command = command_name, path = %path.display(), "workflow loaded");
            WorkflowParser::parse(command_name, &content)
        } else {
            let content = bundled_workflow(command_name)
                .filter(|_| self.bundled_fallback)
                .ok_or(WorkflowError::NotFound { path })?;
            debug!(command = command_name, "bundled workflow loaded");
            WorkflowParser::parse(command_name, content)
        };

        let workflow = Arc::new(workflow);
        cache.insert(command_name.to_string(), Arc::clone(&workflow));

        Ok(workflow)
    }

    fn document_path(&self, command_name: &str) -> PathBuf {
        self.commands_dir.join(format!("{}.md", command_name))
    }

    /// Command names with a document in the commands directory, plus the
    /// embedded ones when the fallback is on. Sorted, no duplicates.
    pub fn available_commands(&self) -> Vec<String> {
        let mut commands = self.listed_commands();
        if self.bundled_fallback {
            commands.extend(BUNDLED_WORKFLOWS.iter().map(|(name, _)| name.to_string()));
        }
        commands.sort();
        commands.dedup();
        commands
    }

    fn listed_commands(&self) -> Vec<String> {
        let entries = match std::fs::read_dir(&self.commands_dir) {
            Ok(entries) => entries,
            Err(e) => {
                if !(self.bundled_fallback && e.kind() == std::io::ErrorKind::NotFound) {
                    warn!(path = %self.commands_dir.display(), error = %e, "cannot list commands directory");
                }
                return Vec::new();
            }
        };

        entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .filter(|name| {
                !NON_COMMAND_PREFIXES
                    .iter()
                    .any(|prefix| name.starts_with(prefix))
            })
            .filter_map(|name| name.strip_suffix(".md").map(str::to_string))
            .collect()
    }
}
