pub mod config;
pub mod document;
pub mod project;
pub mod workflow;

pub use config::SddConfig;
pub use document::{DocumentCategory, DocumentMetadata, FetchRule};
pub use project::{LifecycleMarker, ProjectContext, ProjectState, NO_ACTIVE_SPEC};
pub use workflow::WorkflowDefinition;
