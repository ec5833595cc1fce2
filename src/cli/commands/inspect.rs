use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::PatcherConfig;
use crate::workflow::WorkflowStore;

pub struct InspectCommand {
    pub input: PathBuf,
    pub target: String,
}

impl InspectCommand {
    pub fn from_config(config: &PatcherConfig, input: Option<PathBuf>) -> Self {
        Self {
            input: input.unwrap_or_else(|| config.input_path.clone()),
            target: config.target_node.clone(),
        }
    }

    pub async fn execute(&self) -> Result<()> {
        println!("👀 Inspecting workflow: {}", self.input.display());
        println!();

        let workflow = WorkflowStore::load(&self.input)
            .await
            .with_context(|| format!("could not load workflow from {}", self.input.display()))?;

        if workflow.nodes.is_empty() {
            println!("📋 Workflow has no nodes");
            return Ok(());
        }

        println!("📋 {} node(s):", workflow.nodes.len());
        for (index, node) in workflow.nodes.iter().enumerate() {
            let marker = if node.name == self.target { "🎯" } else { "  " };
            match (node.node_type(), &node.parameters.js_code) {
                (Some(node_type), Some(code)) => println!(
                    "{marker} {index}: {name} ({node_type}, jsCode {len} bytes)",
                    name = node.name,
                    len = code.len()
                ),
                (Some(node_type), None) => {
                    println!("{marker} {index}: {name} ({node_type})", name = node.name)
                }
                (None, Some(code)) => println!(
                    "{marker} {index}: {name} (jsCode {len} bytes)",
                    name = node.name,
                    len = code.len()
                ),
                (None, None) => println!("{marker} {index}: {name}", name = node.name),
            }
        }

        println!();
        println!("💡 Run 'n8n-patcher patch' to update the 🎯 node");
        Ok(())
    }
}
