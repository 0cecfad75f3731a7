use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Relative location of the optional config file inside a project
pub const CONFIG_FILE: &str = ".github/sdd-mcp.toml";

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SddConfig {
    /// Name reported in the MCP `initialize` response
    #[serde(default = "default_server_name")]
    pub server_name: String,

    /// Directory holding `<command>.md` workflow documents
    #[serde(default)]
    pub commands_dir: Option<PathBuf>,

    /// Log filter directive (e.g., "info", "sdd_mcp=debug")
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_server_name() -> String {
    "sdd-mcp".to_string()
}

impl Default for SddConfig {
    fn default() -> Self {
        Self {
            server_name: default_server_name(),
            commands_dir: None,
            log_level: None,
        }
    }
}

impl SddConfig {
    /// Load config from `.github/sdd-mcp.toml`, falling back to defaults
    pub fn load(project_root: &Path) -> anyhow::Result<Self> {
        let config_path = project_root.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let mut config: SddConfig = toml::from_str(&content)?;

        // Relative commands dirs are relative to the project, not the cwd
        if let Some(dir) = config.commands_dir.take() {
            config.commands_dir = Some(if dir.is_relative() {
                project_root.join(dir)
            } else {
                dir
            });
        }

        Ok(config)
    }

    /// Commands directory: explicit override, then config, then the
    /// documents shipped with the crate
    pub fn resolve_commands_dir(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.commands_dir.clone())
            .unwrap_or_else(default_commands_dir)
    }
}

/// Workflow documents in the crate's source tree. Loaders built for this
/// directory also fall back to the copies embedded in the binary.
pub fn default_commands_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("commands")
}
