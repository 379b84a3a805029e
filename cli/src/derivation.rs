//! Program-derived addresses for Active-domain name accounts
//!
//! Seed layouts must match the deployed programs byte for byte: a name
//! account is derived from `[hashed_name, class, parent]` where an unset
//! class or parent is 32 zero bytes.

use solana_sdk::{pubkey, pubkey::Pubkey};

use crate::hashing::hashed_name;

/// Active-domain name service program
pub const NAME_SERVICE_PROGRAM_ID: Pubkey = pubkey!("ALTNSZ46uaAUU7XUV6awvdorLGqAsPwa9shm7h4uP2FK");

/// TLD house program (registrar configuration per TLD)
pub const TLD_HOUSE_PROGRAM_ID: Pubkey = pubkey!("TLDHkysf5pCnKsVA4gXpNvmy7psXLPEu4LAdDJthT9S");

/// Name of the root account every TLD hangs off
pub const ROOT_NAME: &str = "ANS";

/// Seed prefix for TLD house accounts
pub const TLD_HOUSE_SEED: &[u8] = b"tld_house";

/// Default TLD for Seeker IDs
pub const DEFAULT_DOMAIN: &str = ".skr";

const ZERO_SEED: [u8; 32] = [0u8; 32];

/// Derive a name account under the name-service program.
///
/// `class` and `parent` default to the zero seed when absent.
pub fn name_account_key(
    hashed_name: &[u8; 32],
    class: Option<&Pubkey>,
    parent: Option<&Pubkey>,
) -> (Pubkey, u8) {
    let class_seed = class.map(|k| k.to_bytes()).unwrap_or(ZERO_SEED);
    let parent_seed = parent.map(|k| k.to_bytes()).unwrap_or(ZERO_SEED);

    Pubkey::find_program_address(
        &[hashed_name.as_ref(), class_seed.as_ref(), parent_seed.as_ref()],
        &NAME_SERVICE_PROGRAM_ID,
    )
}

/// Derive the TLD house account for a domain.
///
/// Only this seed is lower-cased; the name hash keeps the caller's casing.
pub fn tld_house_key(domain: &str) -> (Pubkey, u8) {
    let tld = domain.to_lowercase();
    Pubkey::find_program_address(&[TLD_HOUSE_SEED, tld.as_bytes()], &TLD_HOUSE_PROGRAM_ID)
}

/// Accounts of a TLD, independent of any subdomain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainKeys {
    pub root_account: Pubkey,
    pub domain_account: Pubkey,
    pub domain_tld_account: Pubkey,
}

impl DomainKeys {
    pub fn derive(domain: &str) -> Self {
        let (root_account, _) = name_account_key(&hashed_name(ROOT_NAME), None, None);
        let (domain_account, _) =
            name_account_key(&hashed_name(domain), None, Some(&root_account));
        let (domain_tld_account, _) = tld_house_key(domain);

        Self {
            root_account,
            domain_account,
            domain_tld_account,
        }
    }
}

/// Every address needed to look up `subdomain` under `domain`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainAddresses {
    pub domain: DomainKeys,
    /// Name account of the subdomain (ownership record)
    pub name_account: Pubkey,
    /// Reverse-lookup account keyed by the name account, classed by the TLD house
    pub tld_account: Pubkey,
}

impl DomainAddresses {
    pub fn derive(domain: &str, subdomain: &str) -> Self {
        let domain_keys = DomainKeys::derive(domain);
        Self::derive_under(domain_keys, subdomain)
    }

    /// Derive subdomain accounts when the TLD accounts are already known
    pub fn derive_under(domain: DomainKeys, subdomain: &str) -> Self {
        let (name_account, _) =
            name_account_key(&hashed_name(subdomain), None, Some(&domain.domain_account));

        let reverse_hash = hashed_name(&name_account.to_string());
        let (tld_account, _) =
            name_account_key(&reverse_hash, Some(&domain.domain_tld_account), None);

        Self {
            domain,
            name_account,
            tld_account,
        }
    }
}
