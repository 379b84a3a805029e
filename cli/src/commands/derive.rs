//! Print derived name-service addresses without touching the network

use anyhow::Result;
use colored::Colorize;

use crate::commands::resolve::normalize_subdomain;
use crate::derivation::{DomainAddresses, NAME_SERVICE_PROGRAM_ID, ROOT_NAME, TLD_HOUSE_PROGRAM_ID};
use crate::hashing::hashed_name;

pub fn run(domain: &str, subdomain: &str) -> Result<()> {
    let subdomain = normalize_subdomain(subdomain, domain);
    let addresses = DomainAddresses::derive(domain, &subdomain);

    println!();
    println!("{}", format!("Addresses for {}{}", subdomain, domain).yellow().bold());
    println!();

    println!("{}:", "Programs".cyan());
    println!("  Name service: {}", NAME_SERVICE_PROGRAM_ID);
    println!("  TLD house:    {}", TLD_HOUSE_PROGRAM_ID);
    println!();

    println!("{}:", "Hashed names".cyan());
    println!("  {:<12} {}", ROOT_NAME, hex::encode(hashed_name(ROOT_NAME)));
    println!("  {:<12} {}", domain, hex::encode(hashed_name(domain)));
    println!("  {:<12} {}", subdomain, hex::encode(hashed_name(&subdomain)));
    println!();

    println!("{}:", "Domain".cyan());
    println!("  Root account:       {}", addresses.domain.root_account);
    println!("  Domain account:     {}", addresses.domain.domain_account);
    println!("  Domain TLD house:   {}", addresses.domain.domain_tld_account);
    println!();

    println!("{}:", "Subdomain".cyan());
    println!("  Name account:       {}", addresses.name_account);
    println!("  TLD account:        {}", addresses.tld_account);
    println!();

    Ok(())
}
