use anyhow::Result;

pub mod init;
pub mod inspect;
pub mod patch;

pub async fn show_usage() -> Result<()> {
    println!("🔧 n8n-patcher - Workflow node script updater");
    println!();
    println!("To update the Parse Node Code node:");
    println!("  🩹 n8n-patcher patch     # Patch the workflow and print the push command");
    println!("  👀 n8n-patcher inspect   # List the nodes of the workflow export");
    println!();
    println!("Setup:");
    println!("  ⚙️  n8n-patcher init      # Write a default n8n-patcher.toml");
    println!();
    println!("💡 Start with 'n8n-patcher patch' - defaults match the Nista workflow export");
    Ok(())
}
