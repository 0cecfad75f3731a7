//! CLI subcommands

pub mod docs;
pub mod mcp_server;
pub mod status;
pub mod workflow;

use crate::mcp::ToolContext;
use crate::models::config::default_commands_dir;
use crate::models::SddConfig;
use crate::services::WorkflowLoader;
use crate::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Project root, config and commands directory resolved from flags,
/// environment and `.github/sdd-mcp.toml`
#[derive(Debug, Clone)]
pub struct Settings {
    pub project_root: PathBuf,
    pub config: SddConfig,
    pub commands_dir: PathBuf,
}

impl Settings {
    pub fn resolve(project_root: Option<&Path>, commands_dir: Option<&Path>) -> Result<Self> {
        let project_root = match project_root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };

        let config = SddConfig::load(&project_root).with_context(|| {
            format!(
                "Failed to load {}",
                project_root.join(crate::models::config::CONFIG_FILE).display()
            )
        })?;
        let commands_dir = config.resolve_commands_dir(commands_dir);

        Ok(Self {
            project_root,
            config,
            commands_dir,
        })
    }

    /// Loader for the resolved commands directory. The default directory
    /// falls back to the embedded documents when it is missing.
    pub fn loader(&self) -> WorkflowLoader {
        let loader = WorkflowLoader::new(&self.commands_dir);
        if self.commands_dir == default_commands_dir() {
            loader.with_bundled_fallback()
        } else {
            loader
        }
    }

    pub fn tool_context(&self) -> ToolContext {
        ToolContext::new(&self.project_root, self.loader())
    }
}
