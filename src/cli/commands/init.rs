use std::path::Path;

use anyhow::{bail, Result};

use crate::config::PatcherConfig;

const CONFIG_FILE: &str = "n8n-patcher.toml";

pub struct InitCommand {
    pub force: bool,
}

impl InitCommand {
    pub fn new(force: bool) -> Self {
        Self { force }
    }

    pub async fn execute(&self) -> Result<()> {
        if Path::new(CONFIG_FILE).exists() && !self.force {
            bail!("{CONFIG_FILE} already exists (use --force to overwrite)");
        }

        PatcherConfig::default().save_to_file(CONFIG_FILE)?;

        println!("⚙️  Wrote default configuration to {CONFIG_FILE}");
        println!("   Edit it to point at a different export, node or n8n instance.");
        Ok(())
    }
}
