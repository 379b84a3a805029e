//! Fetch and decode a raw name account

use std::str::FromStr;

use anyhow::{Context, Result};
use colored::Colorize;
use solana_sdk::pubkey::Pubkey;

use crate::config::CliConfig;
use crate::resolver::format_unix_time;
use crate::rpc::{NameServiceRpc, SolanaRpc};
use crate::state::{NameRecordHeader, NAME_RECORD_HEADER_LEN};

pub async fn run(config: &CliConfig, address: &str) -> Result<()> {
    let address = Pubkey::from_str(address).context("Invalid account address")?;
    let rpc = SolanaRpc::new(&config.rpc_url, config.commitment_config()?);

    println!("Fetching account {}...", address);

    let Some(data) = rpc.get_account_data(&address).await? else {
        println!("{}", "Account does not exist.".yellow());
        return Ok(());
    };

    let header = NameRecordHeader::try_from_account_data(&data)
        .with_context(|| format!("{} is not a name account", address))?;

    println!();
    println!("{}", "Name Account".yellow().bold());
    println!();
    println!("   Discriminator:    {}", hex::encode(header.discriminator));
    println!("   Name:             {}", header.name);
    println!("   Owner:            {}", header.owner);
    println!("   Class:            {}", header.class);
    println!("   Created:          {}", format_unix_time(header.created_at));
    match header.expiry() {
        Some(expiry) => println!("   Expires:          {}", format_unix_time(expiry)),
        None => println!("   Expires:          {}", "never".dimmed()),
    }
    println!("   Non-transferable: {}", header.non_transferable);
    println!(
        "   Data:             {} bytes ({} header + {} payload)",
        data.len(),
        NAME_RECORD_HEADER_LEN,
        data.len() - NAME_RECORD_HEADER_LEN
    );
    println!();

    Ok(())
}
