use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a project, derived from filesystem evidence
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProjectState {
    /// Nothing spec-driven on disk yet
    New,
    /// Pre-existing code under `repos/`, not configured
    Existing,
    /// `.github/` exists but `product.md` is missing
    Partial,
    /// `.github/product.md` exists
    Configured,
}

impl ProjectState {
    pub const ALL: [ProjectState; 4] = [
        ProjectState::New,
        ProjectState::Existing,
        ProjectState::Partial,
        ProjectState::Configured,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ProjectState::New => "NEW",
            ProjectState::Existing => "EXISTING",
            ProjectState::Partial => "PARTIAL",
            ProjectState::Configured => "CONFIGURED",
        }
    }

    /// Fixed human-readable sentence for the state
    pub fn describe(&self) -> &'static str {
        match self {
            ProjectState::New => "New project - not yet configured for spec-driven development",
            ProjectState::Existing => {
                "Existing project with code - not yet configured for spec-driven development"
            }
            ProjectState::Partial => {
                "Partially configured - .github directory exists but missing product.md"
            }
            ProjectState::Configured => "Configured for spec-driven development",
        }
    }

    /// Describe a state given by its label; labels outside the four states
    /// get a generic sentence instead of an error.
    pub fn describe_label(label: &str) -> &'static str {
        label
            .parse::<ProjectState>()
            .map(|state| state.describe())
            .unwrap_or("Unknown project state")
    }
}

impl fmt::Display for ProjectState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProjectState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NEW" => Ok(ProjectState::New),
            "EXISTING" => Ok(ProjectState::Existing),
            "PARTIAL" => Ok(ProjectState::Partial),
            "CONFIGURED" => Ok(ProjectState::Configured),
            other => Err(format!("Unknown project state: {}", other)),
        }
    }
}

/// Coarse lifecycle marker recorded in `.github/context.md`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleMarker {
    #[default]
    New,
    Configured,
    Developing,
    Documented,
}

impl LifecycleMarker {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleMarker::New => "new",
            LifecycleMarker::Configured => "configured",
            LifecycleMarker::Developing => "developing",
            LifecycleMarker::Documented => "documented",
        }
    }

    /// Exact match against the four recorded markers
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "new" => Some(LifecycleMarker::New),
            "configured" => Some(LifecycleMarker::Configured),
            "developing" => Some(LifecycleMarker::Developing),
            "documented" => Some(LifecycleMarker::Documented),
            _ => None,
        }
    }
}

impl fmt::Display for LifecycleMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentinel stored in `ACTIVE_SPEC` when no spec is selected
pub const NO_ACTIVE_SPEC: &str = "none";

/// Record read from `.github/context.md`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContext {
    /// Active spec folder (e.g., "SPEC-20240101-login") or `"none"`
    pub active_spec: String,

    /// Last update date, `YYYY-MM-DD`
    pub last_updated: String,

    pub project_state: LifecycleMarker,
}

impl ProjectContext {
    pub fn has_active_spec(&self) -> bool {
        !self.active_spec.is_empty() && self.active_spec != NO_ACTIVE_SPEC
    }

    pub fn active_spec(&self) -> Option<&str> {
        if self.has_active_spec() {
            Some(&self.active_spec)
        } else {
            None
        }
    }
}
