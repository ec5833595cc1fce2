use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::PatcherConfig;
use crate::remote::RemoteConfig;
use crate::workflow::{apply_patch, PatchOutcome, WorkflowStore, PARSE_NODE_SCRIPT};

pub struct PatchCommand {
    pub input: PathBuf,
    pub output: PathBuf,
    pub target: String,
    pub dry_run: bool,
    pub remote: RemoteConfig,
}

impl PatchCommand {
    /// Build the command from loaded configuration, letting CLI flags win
    /// over configured values.
    pub fn from_config(
        config: &PatcherConfig,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        node: Option<String>,
        dry_run: bool,
    ) -> Self {
        Self {
            input: input.unwrap_or_else(|| config.input_path.clone()),
            output: output.unwrap_or_else(|| config.output_path.clone()),
            target: node.unwrap_or_else(|| config.target_node.clone()),
            dry_run,
            remote: config.remote.clone(),
        }
    }

    pub async fn execute(&self) -> Result<()> {
        println!("🩹 Patching workflow: {}", self.input.display());

        let mut workflow = WorkflowStore::load(&self.input)
            .await
            .with_context(|| format!("could not load workflow from {}", self.input.display()))?;

        match apply_patch(&mut workflow, &self.target, PARSE_NODE_SCRIPT) {
            PatchOutcome::Patched {
                node_name,
                old_len,
                new_len,
            } => {
                println!("✅ Found node: {node_name}");
                println!("   Current code length: {old_len}");
                println!("   Updated code length: {new_len}");
            }
            // The original migration treats a missing node as a quiet
            // pass-through: the output file is still written.
            PatchOutcome::NotFound => {
                debug!(target_node = %self.target, "no matching node; workflow passes through unchanged");
            }
        }

        if self.dry_run {
            println!();
            println!(
                "🔍 Dry run - nothing written to {}",
                self.output.display()
            );
            return Ok(());
        }

        WorkflowStore::save(&self.output, &workflow)
            .await
            .with_context(|| format!("could not save workflow to {}", self.output.display()))?;
        println!("💾 Workflow saved to {}", self.output.display());

        println!();
        println!("To apply the update to n8n, run:");
        println!("{}", self.remote.push_command(&self.output));

        Ok(())
    }
}
