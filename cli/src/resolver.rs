//! Subdomain resolution: derive, fetch, decode, and find the activation tx

use chrono::{SecondsFormat, TimeZone, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::derivation::{DomainAddresses, DomainKeys};
use crate::error::ResolveError;
use crate::history::{find_activation, Activation};
use crate::rpc::NameServiceRpc;
use crate::state::NameRecordHeader;

/// Resolved subdomain, rebuilt on every lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainInfo {
    pub domain: String,
    pub subdomain: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    pub owner: String,
    pub activation: Activation,
    pub name_account: String,
    pub tld_account: String,
    pub tld_account_exists: bool,
    pub non_transferable: bool,
    /// Set by [`crate::ranking::assign_ranks`], never by the resolver
    pub rank: Option<u32>,
    #[serde(skip)]
    pub created_at_unix: i64,
}

impl DomainInfo {
    pub fn subdomain_tx(&self) -> Option<&str> {
        self.activation.signature()
    }

    pub fn subdomain_tx_blocktime(&self) -> Option<i64> {
        self.activation.block_time()
    }

    /// `alice.skr`
    pub fn full_name(&self) -> String {
        format!("{}{}", self.subdomain, self.domain)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(Box<DomainInfo>),
    /// Name account does not exist; the subdomain was never activated
    NotFound,
}

impl Resolution {
    pub fn found(self) -> Option<DomainInfo> {
        match self {
            Resolution::Found(info) => Some(*info),
            Resolution::NotFound => None,
        }
    }
}

/// Resolves subdomains through an injected RPC handle
pub struct DomainResolver<R> {
    rpc: R,
}

impl<R: NameServiceRpc> DomainResolver<R> {
    pub fn new(rpc: R) -> Self {
        Self { rpc }
    }

    pub fn rpc(&self) -> &R {
        &self.rpc
    }

    pub async fn resolve(&self, domain: &str, subdomain: &str) -> Result<Resolution, ResolveError> {
        let addresses = DomainAddresses::derive(domain, subdomain);
        self.resolve_addresses(domain, subdomain, &addresses).await
    }

    /// Resolve several subdomains of one TLD.
    ///
    /// Each name gets its own result; a failure does not stop the batch.
    pub async fn resolve_many(
        &self,
        domain: &str,
        subdomains: &[String],
    ) -> Vec<(String, Result<Resolution, ResolveError>)> {
        let domain_keys = DomainKeys::derive(domain);
        let mut results = Vec::with_capacity(subdomains.len());

        for subdomain in subdomains {
            let addresses = DomainAddresses::derive_under(domain_keys, subdomain);
            let result = self.resolve_addresses(domain, subdomain, &addresses).await;
            results.push((subdomain.clone(), result));
        }

        results
    }

    async fn resolve_addresses(
        &self,
        domain: &str,
        subdomain: &str,
        addresses: &DomainAddresses,
    ) -> Result<Resolution, ResolveError> {
        let (name_data, tld_data) = tokio::try_join!(
            self.rpc.get_account_data(&addresses.name_account),
            self.rpc.get_account_data(&addresses.tld_account),
        )?;

        let Some(name_data) = name_data else {
            debug!(subdomain, domain, account = %addresses.name_account, "name account not found");
            return Ok(Resolution::NotFound);
        };

        let header = NameRecordHeader::try_from_account_data(&name_data).map_err(|source| {
            ResolveError::Decode {
                account: addresses.name_account,
                source,
            }
        })?;

        let activation = find_activation(&self.rpc, &addresses.name_account).await;
        info!(subdomain, domain, owner = %header.owner, "resolved");

        Ok(Resolution::Found(Box::new(DomainInfo {
            domain: domain.to_string(),
            subdomain: subdomain.to_string(),
            created_at: format_unix_time(header.created_at),
            expires_at: header.expiry().map(format_unix_time),
            owner: header.owner.to_string(),
            activation,
            name_account: addresses.name_account.to_string(),
            tld_account: addresses.tld_account.to_string(),
            tld_account_exists: tld_data.is_some(),
            non_transferable: header.non_transferable,
            rank: None,
            created_at_unix: header.created_at,
        })))
    }
}

/// RFC 3339 in UTC with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`
///
/// Decoded headers never carry an out-of-range `created_at`; other callers
/// pass RPC block times. Anything chrono cannot place is shown as raw seconds.
pub fn format_unix_time(secs: i64) -> String {
    match Utc.timestamp_opt(secs, 0).single() {
        Some(time) => time.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => secs.to_string(),
    }
}
