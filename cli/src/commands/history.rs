//! Show an account's full signature history and its activation transaction

use std::str::FromStr;

use anyhow::{Context, Result};
use colored::Colorize;
use solana_sdk::pubkey::Pubkey;
use tabled::{settings::Style, Table, Tabled};

use crate::config::CliConfig;
use crate::history::{fetch_signature_history, oldest_successful};
use crate::resolver::format_unix_time;
use crate::rpc::{SignatureRecord, SolanaRpc};

#[derive(Tabled)]
struct SignatureRow {
    #[tabled(rename = "Signature")]
    signature: String,
    #[tabled(rename = "Slot")]
    slot: u64,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&SignatureRecord> for SignatureRow {
    fn from(record: &SignatureRecord) -> Self {
        Self {
            signature: shorten_signature(&record.signature.to_string()),
            slot: record.slot,
            time: record
                .block_time
                .map(format_unix_time)
                .unwrap_or_else(|| "N/A".to_string()),
            status: if record.failed { "failed" } else { "ok" }.to_string(),
        }
    }
}

fn shorten_signature(sig: &str) -> String {
    if sig.len() > 12 {
        format!("{}...{}", &sig[..6], &sig[sig.len() - 6..])
    } else {
        sig.to_string()
    }
}

pub async fn run(config: &CliConfig, address: &str, show: usize) -> Result<()> {
    let address = Pubkey::from_str(address).context("Invalid account address")?;
    let rpc = SolanaRpc::new(&config.rpc_url, config.commitment_config()?);

    println!("{}", format!("Scanning signature history of {}...", address).cyan());

    let history = fetch_signature_history(&rpc, &address)
        .await
        .context("Failed to fetch signature history")?;

    if history.is_empty() {
        println!("{}", "No transactions found.".yellow());
        return Ok(());
    }

    let failed = history.iter().filter(|record| record.failed).count();
    println!(
        "Found {} signature(s), {} failed",
        history.len(),
        failed
    );
    println!();

    // Oldest first, matching how activation is picked
    let rows: Vec<SignatureRow> = history.iter().rev().take(show).map(SignatureRow::from).collect();
    println!("{}", Table::new(&rows).with(Style::rounded()));

    if history.len() > show {
        println!(
            "{}",
            format!("... {} newer signature(s) not shown", history.len() - show).dimmed()
        );
    }
    println!();

    match oldest_successful(&history) {
        Some(record) => {
            println!("{}", "Activation transaction:".green().bold());
            println!("  {}", record.signature);
            if let Some(time) = record.block_time {
                println!("  {}", format_unix_time(time));
            }
        }
        None => println!("{}", "No successful transaction in history.".yellow()),
    }

    Ok(())
}
