//! Document metadata for the fetch policy table

use serde::Serialize;
use std::fmt;

/// Which family a project document belongs to
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentCategory {
    Foundation,
    Technical,
    Spec,
    Legacy,
}

/// When an agent should fetch a document
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FetchRule {
    /// Fetch on every task
    Always,
    /// Fetch only when the task touches the document's area
    OnDemand,
    /// Generated once, never fetched again
    NeverRefetch,
    /// Lives inside a spec folder; needs an active spec
    SpecSpecific,
}

impl FetchRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchRule::Always => "always",
            FetchRule::OnDemand => "on-demand",
            FetchRule::NeverRefetch => "never-refetch",
            FetchRule::SpecSpecific => "spec-specific",
        }
    }
}

impl fmt::Display for FetchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the static document table
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    /// Lookup name (e.g., "api.md")
    pub name: &'static str,

    /// Path relative to the project root; spec-specific paths contain `{spec}`
    pub path: &'static str,

    pub category: DocumentCategory,

    pub fetch_rule: FetchRule,

    pub description: &'static str,
}
