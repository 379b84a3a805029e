//! Activation lookup through an account's signature history

use serde::Serialize;
use solana_sdk::{pubkey::Pubkey, signature::Signature};
use tracing::{debug, warn};

use crate::error::RpcError;
use crate::rpc::{NameServiceRpc, SignatureRecord, MAX_SIGNATURES_PER_PAGE};

/// Outcome of looking for the first successful transaction on a name account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Activation {
    /// Oldest successful transaction touching the account
    Confirmed {
        signature: String,
        slot: u64,
        block_time: Option<i64>,
    },
    /// History was scanned fully and holds no successful transaction
    Missing,
    /// History could not be read; says nothing about the account
    LookupFailed { reason: String },
}

impl Activation {
    pub fn signature(&self) -> Option<&str> {
        match self {
            Activation::Confirmed { signature, .. } => Some(signature),
            _ => None,
        }
    }

    pub fn block_time(&self) -> Option<i64> {
        match self {
            Activation::Confirmed { block_time, .. } => *block_time,
            _ => None,
        }
    }
}

/// Fetch the complete signature history of `address`, newest first.
///
/// Pages of [`MAX_SIGNATURES_PER_PAGE`] are requested with the previous
/// page's last signature as cursor until a short page (possibly empty)
/// signals the start of history.
pub async fn fetch_signature_history<R>(
    rpc: &R,
    address: &Pubkey,
) -> Result<Vec<SignatureRecord>, RpcError>
where
    R: NameServiceRpc + ?Sized,
{
    let mut history: Vec<SignatureRecord> = Vec::new();
    let mut before: Option<Signature> = None;
    let mut pages = 0usize;

    loop {
        let page = rpc
            .get_signatures_for_address(address, before, MAX_SIGNATURES_PER_PAGE)
            .await?;
        pages += 1;

        let page_len = page.len();
        before = page.last().map(|record| record.signature);
        history.extend(page);

        if page_len < MAX_SIGNATURES_PER_PAGE {
            break;
        }
    }

    debug!(%address, pages, signatures = history.len(), "signature history scanned");
    Ok(history)
}

/// Oldest non-failed entry of a newest-first history
pub fn oldest_successful(history: &[SignatureRecord]) -> Option<&SignatureRecord> {
    history.iter().rev().find(|record| !record.failed)
}

/// Scan the history of `address` and classify its activation transaction
pub async fn find_activation<R>(rpc: &R, address: &Pubkey) -> Activation
where
    R: NameServiceRpc + ?Sized,
{
    match fetch_signature_history(rpc, address).await {
        Ok(history) => match oldest_successful(&history) {
            Some(record) => Activation::Confirmed {
                signature: record.signature.to_string(),
                slot: record.slot,
                block_time: record.block_time,
            },
            None => Activation::Missing,
        },
        Err(err) => {
            warn!(%address, error = %err, "signature history lookup failed");
            Activation::LookupFailed {
                reason: err.to_string(),
            }
        }
    }
}
