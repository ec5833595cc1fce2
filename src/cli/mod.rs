use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

#[derive(Parser)]
#[command(name = "n8n-patcher")]
#[command(about = "Patch the Parse Node Code node of an n8n workflow export")]
#[command(long_about = "n8n-patcher loads an n8n workflow export, replaces the embedded script of \
                       the 'Parse Node Code' node with the current parser, writes the result to a \
                       new file and prints the curl command that pushes it to the n8n API. \
                       Run 'n8n-patcher patch' to perform the update.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replace the target node's script and write the patched workflow
    Patch {
        /// Workflow export to read
        #[arg(long, help = "Path of the workflow JSON export to load")]
        input: Option<PathBuf>,
        /// Where to write the patched workflow
        #[arg(long, help = "Path the patched workflow JSON is written to")]
        output: Option<PathBuf>,
        /// Node to patch (first match wins)
        #[arg(long, help = "Name of the node whose jsCode gets replaced")]
        node: Option<String>,
        /// Show what would change without writing anything
        #[arg(long, help = "Report the patch without writing the output file")]
        dry_run: bool,
    },
    /// List the nodes of a workflow export without changing anything
    Inspect {
        /// Workflow export to read
        #[arg(long, help = "Path of the workflow JSON export to load")]
        input: Option<PathBuf>,
    },
    /// Write a default n8n-patcher.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, help = "Force initialization, overwriting existing configuration")]
        force: bool,
    },
}
