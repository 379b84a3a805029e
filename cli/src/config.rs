//! Configuration for the Seeker CLI
//!
//! Settings live in `~/.seeker/config.json`. A missing file means defaults;
//! command-line flags override whatever the file says.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentConfig;

use crate::derivation::DEFAULT_DOMAIN;
use crate::error::ConfigError;

/// Default directory for CLI settings
const SEEKER_DIR: &str = ".seeker";
const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const DEFAULT_COMMITMENT: &str = "confirmed";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct CliConfig {
    /// Solana JSON-RPC endpoint
    pub rpc_url: String,
    /// TLD used when a command does not name one
    pub domain: String,
    /// `confirmed` or `finalized`
    pub commitment: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            domain: DEFAULT_DOMAIN.to_string(),
            commitment: DEFAULT_COMMITMENT.to_string(),
        }
    }
}

impl CliConfig {
    /// Apply command-line overrides on top of file values
    pub fn with_overrides(
        mut self,
        rpc_url: Option<&str>,
        domain: Option<&str>,
        commitment: Option<&str>,
    ) -> Self {
        if let Some(url) = rpc_url {
            self.rpc_url = url.to_string();
        }
        if let Some(domain) = domain {
            self.domain = domain.to_string();
        }
        if let Some(commitment) = commitment {
            self.commitment = commitment.to_string();
        }
        self
    }

    pub fn commitment_config(&self) -> Result<CommitmentConfig, ConfigError> {
        parse_commitment(&self.commitment)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_domain(&self.domain)?;
        self.commitment_config()?;
        Ok(())
    }
}

/// Signature history needs at least `confirmed`, so `processed` is refused
pub fn parse_commitment(value: &str) -> Result<CommitmentConfig, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        _ => Err(ConfigError::InvalidCommitment(value.to_string())),
    }
}

pub fn validate_domain(domain: &str) -> Result<(), ConfigError> {
    if domain.len() < 2 || !domain.starts_with('.') {
        return Err(ConfigError::InvalidDomain(domain.to_string()));
    }
    Ok(())
}

/// Get the settings directory path
pub fn seeker_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(SEEKER_DIR))
        .ok_or(ConfigError::NoHomeDir)
}

/// Get the config file path
pub fn config_file() -> Result<PathBuf, ConfigError> {
    Ok(seeker_dir()?.join(CONFIG_FILE))
}

/// Load config from `path`, falling back to defaults when it does not exist.
///
/// Values are not validated here so that flags can still replace a bad
/// saved value; callers validate after applying overrides.
pub fn load_config_from(path: &Path) -> Result<CliConfig, ConfigError> {
    if !path.exists() {
        return Ok(CliConfig::default());
    }

    let json = fs::read_to_string(path)?;
    let config: CliConfig = serde_json::from_str(&json)?;

    Ok(config)
}

pub fn save_config_to(path: &Path, config: &CliConfig) -> Result<(), ConfigError> {
    config.validate()?;

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;

    Ok(())
}

/// Domain for offline commands: the flag if given, else the saved value.
///
/// Commitment and RPC settings are not consulted.
pub fn domain_setting(flag: Option<&str>) -> Result<String, ConfigError> {
    match flag {
        Some(domain) => {
            validate_domain(domain)?;
            Ok(domain.to_string())
        }
        None => domain_setting_from(&config_file()?),
    }
}

pub fn domain_setting_from(path: &Path) -> Result<String, ConfigError> {
    let domain = load_config_from(path)?.domain;
    validate_domain(&domain)?;
    Ok(domain)
}

pub fn load_config() -> Result<CliConfig, ConfigError> {
    load_config_from(&config_file()?)
}

pub fn save_config(config: &CliConfig) -> Result<(), ConfigError> {
    save_config_to(&config_file()?, config)
}
