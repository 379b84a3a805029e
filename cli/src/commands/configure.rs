//! Show or update the saved CLI configuration

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::{config_file, load_config, save_config, CliConfig};

pub fn show(effective: &CliConfig) -> Result<()> {
    let path = config_file()?;

    println!();
    println!("{}", "Seeker Configuration".yellow().bold());
    println!();
    println!("{}:", "Config File".cyan());
    if path.exists() {
        println!("  {}", path.display());
    } else {
        println!("  {} {}", path.display(), "(not created, using defaults)".dimmed());
    }
    println!();
    println!("{}:", "RPC Endpoint".cyan());
    println!("  {}", effective.rpc_url);
    println!();
    println!("{}:", "Domain".cyan());
    println!("  {}", effective.domain);
    println!();
    println!("{}:", "Commitment".cyan());
    println!("  {}", effective.commitment);
    println!();

    Ok(())
}

pub fn set(rpc_url: Option<&str>, domain: Option<&str>, commitment: Option<&str>) -> Result<()> {
    let updated: CliConfig = load_config()
        .context("Failed to load existing config")?
        .with_overrides(rpc_url, domain, commitment);

    save_config(&updated).context("Failed to save config")?;

    println!("{}", "Configuration saved.".green());
    show(&updated)
}
