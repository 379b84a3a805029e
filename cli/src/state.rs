//! On-chain name account header
//!
//! Layout (121 bytes, little-endian integers):
//! 8 (discriminator) + 32 (name) + 32 (owner) + 32 (class)
//! + 8 (expires_at) + 8 (created_at) + 1 (non_transferable)

use borsh::BorshDeserialize;
use chrono::{TimeZone, Utc};
use solana_sdk::pubkey::Pubkey;

use crate::error::DecodeError;

/// Field widths in on-chain order
const LAYOUT: [(&str, usize); 7] = [
    ("discriminator", 8),
    ("name", 32),
    ("owner", 32),
    ("class", 32),
    ("expires_at", 8),
    ("created_at", 8),
    ("non_transferable", 1),
];

/// Size of the header every name account starts with
pub const NAME_RECORD_HEADER_LEN: usize = 121;

/// Expiry at or beyond 9999-12-31T23:59:59Z is treated as permanent
pub const NON_EXPIRING_SENTINEL: i64 = 253_402_300_799;

#[derive(BorshDeserialize)]
struct RawHeader {
    discriminator: [u8; 8],
    name: [u8; 32],
    owner: [u8; 32],
    class: [u8; 32],
    expires_at: i64,
    created_at: i64,
    non_transferable: u8,
}

/// Decoded name account header (domain or subdomain)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRecordHeader {
    pub discriminator: [u8; 8],
    /// Account this record describes
    pub name: Pubkey,
    /// Current owner wallet
    pub owner: Pubkey,
    pub class: Pubkey,
    /// Unix seconds; 0 or the sentinel means never
    pub expires_at: i64,
    /// Unix seconds, always within the range chrono can format
    pub created_at: i64,
    pub non_transferable: bool,
}

impl NameRecordHeader {
    /// Decode the header from raw account data.
    ///
    /// Bytes past the header are record payload and are ignored.
    pub fn try_from_account_data(data: &[u8]) -> Result<Self, DecodeError> {
        check_layout(data.len())?;

        let mut header = &data[..NAME_RECORD_HEADER_LEN];
        let raw = RawHeader::deserialize(&mut header)
            .map_err(|e| DecodeError::Borsh(e.to_string()))?;

        let non_transferable = match raw.non_transferable {
            0 => false,
            1 => true,
            other => return Err(DecodeError::InvalidFlag(other)),
        };

        if Utc.timestamp_opt(raw.created_at, 0).single().is_none() {
            return Err(DecodeError::InvalidTimestamp {
                field: "created_at",
                value: raw.created_at,
            });
        }

        Ok(Self {
            discriminator: raw.discriminator,
            name: Pubkey::new_from_array(raw.name),
            owner: Pubkey::new_from_array(raw.owner),
            class: Pubkey::new_from_array(raw.class),
            expires_at: raw.expires_at,
            created_at: raw.created_at,
            non_transferable,
        })
    }

    /// Expiry in Unix seconds, `None` for permanent names
    pub fn expiry(&self) -> Option<i64> {
        if self.expires_at <= 0 || self.expires_at >= NON_EXPIRING_SENTINEL {
            None
        } else {
            Some(self.expires_at)
        }
    }
}

/// Report the first field that does not fit in `len` bytes
fn check_layout(len: usize) -> Result<(), DecodeError> {
    let mut end = 0;
    for (field, width) in LAYOUT {
        end += width;
        if len < end {
            return Err(DecodeError::Truncated {
                field,
                needed: end,
                actual: len,
            });
        }
    }
    Ok(())
}
