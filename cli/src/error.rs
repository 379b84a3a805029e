//! Error types for name resolution

use solana_client::client_error::ClientError;
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("account data truncated at `{field}`: need {needed} bytes, got {actual}")]
    Truncated {
        field: &'static str,
        needed: usize,
        actual: usize,
    },

    #[error("invalid non-transferable flag byte: {0:#04x}")]
    InvalidFlag(u8),

    #[error("`{field}` is not a representable timestamp: {value}")]
    InvalidTimestamp { field: &'static str, value: i64 },

    #[error("borsh decode failed: {0}")]
    Borsh(String),
}

#[derive(Error, Debug)]
pub enum RpcError {
    #[error("ClientError: {0}")]
    ClientError(#[from] Box<ClientError>),

    #[error("invalid signature `{0}` in RPC response")]
    InvalidSignature(String),

    #[error("Error: `{0}`")]
    CustomError(String),
}

impl From<ClientError> for RpcError {
    fn from(err: ClientError) -> Self {
        RpcError::ClientError(Box::new(err))
    }
}

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("RPC request failed: {0}")]
    Rpc(#[from] RpcError),

    #[error("malformed name account {account}: {source}")]
    Decode {
        account: Pubkey,
        #[source]
        source: DecodeError,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unsupported commitment `{0}` (expected `confirmed` or `finalized`)")]
    InvalidCommitment(String),

    #[error("domain must start with '.', got `{0}`")]
    InvalidDomain(String),

    #[error("could not determine home directory")]
    NoHomeDir,

    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("config file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
