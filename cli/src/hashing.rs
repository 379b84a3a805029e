//! Name hashing for the Active-domain name service

use sha2::{Digest, Sha256};

/// Prefix the name service prepends to every name before hashing
pub const NAME_SERVICE_PREFIX: &str = "ALT Name Service";

/// Hash a name the way the name-service program does when it builds PDA seeds.
///
/// The input is used verbatim (no case folding or trimming).
pub fn hashed_name(name: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(NAME_SERVICE_PREFIX.as_bytes());
    hasher.update(name.as_bytes());
    hasher.finalize().into()
}
