//! RPC access used by the resolver
//!
//! The resolver only talks to the chain through [`NameServiceRpc`], so
//! callers hand it a connection explicitly and tests can substitute a mock.

use std::str::FromStr;

use async_trait::async_trait;
use solana_account_decoder::UiAccountEncoding;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_client::GetConfirmedSignaturesForAddress2Config;
use solana_client::rpc_config::RpcAccountInfoConfig;
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey, signature::Signature};
use tracing::debug;

use crate::error::RpcError;

/// Solana's cap on `getSignaturesForAddress` page size
pub const MAX_SIGNATURES_PER_PAGE: usize = 1000;

/// One entry of an address's transaction history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureRecord {
    pub signature: Signature,
    pub slot: u64,
    pub block_time: Option<i64>,
    /// Transaction landed but returned an error
    pub failed: bool,
}

#[async_trait]
pub trait NameServiceRpc: Send + Sync {
    /// Raw account data, `None` when the account does not exist
    async fn get_account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, RpcError>;

    /// One page of signatures, newest first, strictly older than `before`
    async fn get_signatures_for_address(
        &self,
        address: &Pubkey,
        before: Option<Signature>,
        limit: usize,
    ) -> Result<Vec<SignatureRecord>, RpcError>;
}

/// [`NameServiceRpc`] over a Solana JSON-RPC endpoint
pub struct SolanaRpc {
    client: RpcClient,
    commitment: CommitmentConfig,
}

impl SolanaRpc {
    pub fn new(rpc_url: &str, commitment: CommitmentConfig) -> Self {
        Self {
            client: RpcClient::new_with_commitment(rpc_url.to_string(), commitment),
            commitment,
        }
    }
}

#[async_trait]
impl NameServiceRpc for SolanaRpc {
    async fn get_account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, RpcError> {
        let config = RpcAccountInfoConfig {
            encoding: Some(UiAccountEncoding::Base64),
            commitment: Some(self.commitment),
            ..Default::default()
        };

        let response = self.client.get_account_with_config(address, config).await?;
        debug!(%address, exists = response.value.is_some(), slot = response.context.slot, "fetched account");

        Ok(response.value.map(|account| account.data))
    }

    async fn get_signatures_for_address(
        &self,
        address: &Pubkey,
        before: Option<Signature>,
        limit: usize,
    ) -> Result<Vec<SignatureRecord>, RpcError> {
        let config = GetConfirmedSignaturesForAddress2Config {
            before,
            until: None,
            limit: Some(limit.min(MAX_SIGNATURES_PER_PAGE)),
            commitment: Some(self.commitment),
        };

        let statuses = self
            .client
            .get_signatures_for_address_with_config(address, config)
            .await?;

        statuses
            .into_iter()
            .map(|status| {
                let signature = Signature::from_str(&status.signature)
                    .map_err(|_| RpcError::InvalidSignature(status.signature.clone()))?;
                Ok(SignatureRecord {
                    signature,
                    slot: status.slot,
                    block_time: status.block_time,
                    failed: status.err.is_some(),
                })
            })
            .collect()
    }
}
