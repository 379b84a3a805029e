//! Resolve a list of Seeker IDs and rank them by activation order

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use crate::commands::resolve::normalize_subdomain;
use crate::config::CliConfig;
use crate::history::Activation;
use crate::ranking::assign_ranks;
use crate::resolver::{format_unix_time, DomainInfo, DomainResolver, Resolution};
use crate::rpc::SolanaRpc;

#[derive(Tabled)]
struct LeaderboardRow {
    #[tabled(rename = "Rank")]
    rank: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Owner")]
    owner: String,
    #[tabled(rename = "Activated")]
    activated: String,
}

impl From<&DomainInfo> for LeaderboardRow {
    fn from(info: &DomainInfo) -> Self {
        let activated = match &info.activation {
            Activation::Confirmed {
                block_time: Some(time),
                ..
            } => format_unix_time(*time),
            Activation::Confirmed { .. } => "unknown time".to_string(),
            Activation::Missing => "-".to_string(),
            Activation::LookupFailed { .. } => "lookup failed".to_string(),
        };

        Self {
            rank: info.rank.unwrap_or_default(),
            name: info.full_name(),
            owner: info.owner.clone(),
            activated,
        }
    }
}

/// One name per line; blank lines and `#` comments are skipped
pub fn parse_name_list(contents: &str, domain: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let name = normalize_subdomain(line, domain);
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

pub async fn run(config: &CliConfig, input: &Path, output: Option<&Path>) -> Result<()> {
    let contents = fs::read_to_string(input)
        .with_context(|| format!("Failed to read name list {}", input.display()))?;
    let names = parse_name_list(&contents, &config.domain);

    if names.is_empty() {
        bail!("No names found in {}", input.display());
    }

    println!(
        "{}",
        format!("Resolving {} name(s) under {}...", names.len(), config.domain).cyan()
    );

    let rpc = SolanaRpc::new(&config.rpc_url, config.commitment_config()?);
    let resolver = DomainResolver::new(rpc);

    let mut found: Vec<DomainInfo> = Vec::new();
    let mut not_found = 0;
    let mut errors = 0;

    for (name, result) in resolver.resolve_many(&config.domain, &names).await {
        match result {
            Ok(Resolution::Found(info)) => found.push(*info),
            Ok(Resolution::NotFound) => not_found += 1,
            Err(err) => {
                errors += 1;
                println!("{}", format!("  {}{}: {}", name, config.domain, err).red());
            }
        }
    }

    assign_ranks(&mut found);

    println!();
    if found.is_empty() {
        println!("{}", "None of the names are activated.".yellow());
    } else {
        let rows: Vec<LeaderboardRow> = found.iter().map(LeaderboardRow::from).collect();
        println!("{}", Table::new(&rows).with(Style::rounded()));
    }

    println!(
        "{}",
        format!(
            "{} ranked, {} not activated, {} failed",
            found.len(),
            not_found,
            errors
        )
        .dimmed()
    );

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&found)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}
