use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::remote::RemoteConfig;

/// Name of the target node in the workflow, as shown in the n8n editor.
pub const DEFAULT_TARGET_NODE: &str = "Parse Node Code";

/// Main configuration for the patcher
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PatcherConfig {
    /// Workflow export to read
    pub input_path: PathBuf,
    /// Where the patched workflow is written
    pub output_path: PathBuf,
    /// Name of the node whose jsCode gets replaced
    pub target_node: String,
    /// Default log level when RUST_LOG is unset
    pub log_level: String,
    /// n8n endpoint used in the printed push command
    pub remote: RemoteConfig,
}

impl Default for PatcherConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("nista_workflow_current.json"),
            output_path: PathBuf::from("nista_workflow_updated.json"),
            target_node: DEFAULT_TARGET_NODE.to_string(),
            log_level: "info".to_string(),
            remote: RemoteConfig::default(),
        }
    }
}

impl PatcherConfig {
    /// Load configuration with precedence:
    /// 1. Default values
    /// 2. Configuration file (n8n-patcher.toml)
    /// 3. Environment variables (prefixed with N8N_PATCHER_)
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&PatcherConfig::default())?);

        if Path::new("n8n-patcher.toml").exists() {
            builder = builder.add_source(File::with_name("n8n-patcher"));
        }

        builder = builder.add_source(
            Environment::with_prefix("N8N_PATCHER")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::debug!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}
