//! Seeker CLI - resolve `.skr` Seeker IDs on Solana

#![allow(dead_code)] // Public API items may only be used by tests

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod derivation;
mod error;
mod hashing;
mod history;
mod ranking;
mod resolver;
mod rpc;
mod state;


#[cfg(test)]
mod test_vectors;



use commands::{account, configure, derive, leaderboard, resolve};

#[derive(Parser)]
#[command(name = "seeker")]
#[command(version = "0.1.0")]
#[command(about = "Look up Seeker IDs (.skr domains) on Solana")]
#[command(long_about = r#"
Seeker resolves Active-domain subdomains such as `alice.skr` straight from
chain state: it derives the name accounts, decodes the owner record and
finds the transaction that first activated the name.

Quick Start:
  1. seeker derive alice          Show the accounts for alice.skr
  2. seeker resolve alice         Look up owner and activation
  3. seeker leaderboard -i ids    Rank a list of names by activation
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Solana RPC URL (overrides config file)
    #[arg(long, global = true)]
    rpc_url: Option<String>,

    /// Commitment level: confirmed or finalized
    #[arg(long, global = true)]
    commitment: Option<String>,

    /// Print debug logs
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a subdomain to its owner and activation transaction
    Resolve {
        /// Subdomain, with or without the TLD (e.g. `alice` or `alice.skr`)
        subdomain: String,

        /// Top-level domain
        #[arg(short, long)]
        domain: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print derived addresses without contacting the network
    Derive {
        subdomain: String,

        #[arg(short, long)]
        domain: Option<String>,
    },

    /// Fetch and decode a name account
    Account {
        /// Name account address (base58)
        address: String,
    },

    /// Show the full signature history of an account
    History {
        /// Account address (base58)
        address: String,

        /// Number of oldest signatures to list
        #[arg(long, default_value = "20")]
        show: usize,
    },

    /// Resolve a list of names and rank them by activation time
    Leaderboard {
        /// File with one name per line
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        domain: Option<String>,

        /// Write ranked records as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or change saved settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show effective settings
    Show,

    /// Save settings to the config file
    Set {
        #[arg(long)]
        rpc_url: Option<String>,

        #[arg(long)]
        domain: Option<String>,

        #[arg(long)]
        commitment: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "seeker=debug,warn" } else { "warn" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = |domain: Option<&str>| -> Result<config::CliConfig> {
        let settings = config::load_config()?.with_overrides(
            cli.rpc_url.as_deref(),
            domain,
            cli.commitment.as_deref(),
        );
        settings.validate()?;
        Ok(settings)
    };

    match &cli.command {
        Commands::Resolve { subdomain, domain, json } => {
            resolve::run(&settings(domain.as_deref())?, subdomain, *json).await?;
        }
        Commands::Derive { subdomain, domain } => {
            let domain = config::domain_setting(domain.as_deref())?;
            derive::run(&domain, subdomain)?;
        }
        Commands::Account { address } => {
            account::run(&settings(None)?, address).await?;
        }
        Commands::History { address, show } => {
            commands::history::run(&settings(None)?, address, *show).await?;
        }
        Commands::Leaderboard { input, domain, output } => {
            leaderboard::run(&settings(domain.as_deref())?, input, output.as_deref()).await?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => configure::show(&settings(None)?)?,
            ConfigAction::Set { rpc_url, domain, commitment } => {
                configure::set(rpc_url.as_deref(), domain.as_deref(), commitment.as_deref())?;
            }
        },
    }

    Ok(())
}
