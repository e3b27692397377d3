//! Errors raised by the EVM backend

use std::path::PathBuf;
use std::time::Duration;

use ethers::providers::ProviderError;
use ethers::types::U256;
use thiserror::Error;

use crate::domain::ports::BackendError;

#[derive(Error, Debug)]
pub enum EvmError {
    #[error("no artifact for {contract} under {root}")]
    ArtifactNotFound { contract: String, root: PathBuf },

    #[error("failed to read artifact {path}: {source}")]
    ArtifactRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid artifact {path}: {message}")]
    ArtifactInvalid { path: PathBuf, message: String },

    #[error(transparent)]
    Link(#[from] LinkError),

    #[error(transparent)]
    Abi(#[from] AbiError),

    #[error("invalid RPC URL '{url}': {message}")]
    InvalidRpcUrl { url: String, message: String },

    #[error("failed to start the RPC runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// A node request failed before any transaction was sent
    #[error("{method} failed: {source}")]
    Provider {
        method: &'static str,
        #[source]
        source: ProviderError,
    },

    #[error("construction reverted in transaction {tx_hash}")]
    Reverted { tx_hash: String },

    #[error("receipt for {tx_hash} has no contract address")]
    MissingContractAddress { tx_hash: String },

    /// The transaction was sent but never confirmed in time; it may still land
    #[error("no receipt for {tx_hash} after {}s{}", .waited.as_secs(), last_error_note(.last_error))]
    ReceiptTimeout {
        tx_hash: String,
        waited: Duration,
        last_error: Option<String>,
    },

    #[error("node has no unlocked accounts; pass --from")]
    NoAccounts,

    #[error("connected to chain {actual}, but the network profile expects {expected}")]
    ChainMismatch { expected: u64, actual: U256 },
}

fn last_error_note(last_error: &Option<String>) -> String {
    last_error
        .as_ref()
        .map(|e| format!(" (last poll error: {})", e))
        .unwrap_or_default()
}

/// Library linking failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("{contract} needs library {library}, but no address was supplied")]
    Unlinked { contract: String, library: String },

    #[error("{contract} does not reference library {library}")]
    UnusedLibrary { contract: String, library: String },

    #[error("link reference for {library} at byte {start} (length {length}) is outside the bytecode")]
    OutOfRange {
        library: String,
        start: usize,
        length: usize,
    },

    #[error("{contract} bytecode still contains an unresolved library placeholder")]
    Unresolved { contract: String },

    #[error("invalid bytecode for {contract}: {message}")]
    InvalidBytecode { contract: String, message: String },
}

/// Constructor argument encoding failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AbiError {
    #[error("'{value}' is not a 20-byte hex address")]
    InvalidAddress { value: String },
}

impl From<EvmError> for BackendError {
    fn from(err: EvmError) -> Self {
        BackendError::new(err.to_string())
    }
}
