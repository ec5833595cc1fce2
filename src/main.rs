use anyhow::Result;
use clap::Parser;

use n8n_patcher::cli::commands::{init::InitCommand, inspect::InspectCommand, patch::PatchCommand};
use n8n_patcher::cli::{commands, Cli, Commands};
use n8n_patcher::config::PatcherConfig;
use n8n_patcher::telemetry;

fn main() -> Result<()> {
    let cli = Cli::parse();

    PatcherConfig::load_env_file()?;
    let config = PatcherConfig::load()?;
    telemetry::init_tracing(&config.log_level)?;

    match cli.command {
        // Default behavior: no subcommand - explain how to use the tool
        None => tokio::runtime::Runtime::new()?.block_on(commands::show_usage()),
        Some(Commands::Patch {
            input,
            output,
            node,
            dry_run,
        }) => tokio::runtime::Runtime::new()?.block_on(async {
            PatchCommand::from_config(&config, input, output, node, dry_run)
                .execute()
                .await
        }),
        Some(Commands::Inspect { input }) => tokio::runtime::Runtime::new()?.block_on(async {
            InspectCommand::from_config(&config, input).execute().await
        }),
        Some(Commands::Init { force }) => {
            tokio::runtime::Runtime::new()?.block_on(async { InitCommand::new(force).execute().await })
        }
    }
}
