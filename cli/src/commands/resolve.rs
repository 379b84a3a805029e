//! Resolve a Seeker ID to its owner and activation transaction

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::CliConfig;
use crate::history::Activation;
use crate::resolver::{DomainInfo, DomainResolver, Resolution};
use crate::rpc::SolanaRpc;

pub async fn run(config: &CliConfig, subdomain: &str, json: bool) -> Result<()> {
    let subdomain = normalize_subdomain(subdomain, &config.domain);
    let rpc = SolanaRpc::new(&config.rpc_url, config.commitment_config()?);
    let resolver = DomainResolver::new(rpc);

    if !json {
        println!(
            "{}",
            format!("Resolving {}{}...", subdomain, config.domain).cyan()
        );
    }

    let resolution = resolver
        .resolve(&config.domain, &subdomain)
        .await
        .with_context(|| format!("Failed to resolve {}{}", subdomain, config.domain))?;

    match resolution {
        Resolution::Found(info) if json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Resolution::Found(info) => print_domain_info(&info),
        Resolution::NotFound if json => {
            println!("null");
        }
        Resolution::NotFound => {
            println!();
            println!(
                "{}",
                format!("{}{} has not been activated.", subdomain, config.domain).yellow()
            );
        }
    }

    Ok(())
}

/// Accept `alice` or `alice.skr` for the `.skr` domain
pub fn normalize_subdomain(input: &str, domain: &str) -> String {
    let trimmed = input.trim();
    trimmed
        .strip_suffix(domain)
        .filter(|name| !name.is_empty())
        .unwrap_or(trimmed)
        .to_string()
}

pub fn print_domain_info(info: &DomainInfo) {
    println!();
    println!("{}", info.full_name().yellow().bold());
    println!();
    println!("   Owner:            {}", info.owner);
    println!("   Created:          {}", info.created_at);
    if let Some(expires_at) = &info.expires_at {
        println!("   Expires:          {}", expires_at);
    }
    println!(
        "   Transferable:     {}",
        if info.non_transferable { "no" } else { "yes" }
    );
    println!("   Name account:     {}", info.name_account);
    println!(
        "   TLD account:      {} {}",
        info.tld_account,
        if info.tld_account_exists { "" } else { "(not initialized)" }.dimmed()
    );

    match &info.activation {
        Activation::Confirmed {
            signature,
            block_time,
            ..
        } => {
            println!("   Activation tx:    {}", signature.green());
            if let Some(time) = block_time {
                println!(
                    "   Activated:        {}",
                    crate::resolver::format_unix_time(*time)
                );
            }
        }
        Activation::Missing => {
            println!("   Activation tx:    {}", "none found".yellow());
        }
        Activation::LookupFailed { reason } => {
            println!(
                "   Activation tx:    {}",
                format!("lookup failed ({})", reason).red()
            );
        }
    }

    if let Some(rank) = info.rank {
        println!("   Rank:             #{}", rank);
    }
    println!();
}
