//! JSON-RPC deployment backend
//!
//! Deploys from an account the node manages (`eth_sendTransaction`); no keys
//! are handled locally. Per step:
//! 1. Load the Hardhat artifact for the module
//! 2. Link library addresses into its bytecode
//! 3. Append the ABI-encoded constructor arguments
//! 4. Send the creation transaction and poll for its receipt
//!
//! The pipeline is sequential, so each `ethers` request is driven to
//! completion on a current-thread runtime owned by the backend.

use std::cell::OnceCell;
use std::collections::BTreeMap;
use std::future::Future;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use ethers::providers::{Http, Middleware, Provider, ProviderError};
use ethers::types::{Address as EvmAddress, Bytes, TransactionRequest, H256, U256, U64};
use tokio::runtime::{Builder as RuntimeBuilder, Runtime};
use tracing::{debug, info, info_span, warn};

use super::abi::{encode_constructor_args, parse_address};
use super::artifact::ArtifactStore;
use super::error::EvmError;
use super::linker::link;
use crate::config::NetworkProfile;
use crate::domain::entities::DeployStep;
use crate::domain::ports::{BackendError, DeployBackend};
use crate::domain::value_objects::Address;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvmSettings {
    pub rpc_url: String,
    pub artifacts: PathBuf,
    /// Sender account; the node's first account when unset
    pub from: Option<String>,
    pub expected_chain_id: Option<u64>,
    pub gas: Option<u64>,
    pub poll_interval: Duration,
    pub receipt_timeout: Duration,
    pub request_timeout: Duration,
}

impl EvmSettings {
    pub fn from_profile(profile: &NetworkProfile, artifacts: impl Into<PathBuf>) -> Self {
        Self {
            rpc_url: profile.rpc_url.clone(),
            artifacts: artifacts.into(),
            from: None,
            expected_chain_id: profile.chain_id,
            gas: profile.gas,
            poll_interval: profile.poll_interval(),
            receipt_timeout: profile.receipt_timeout(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_from(mut self, from: Option<String>) -> Self {
        self.from = from;
        self
    }
}

pub struct EvmDeployBackend {
    provider: Provider<Http>,
    runtime: Runtime,
    artifacts: ArtifactStore,
    settings: EvmSettings,
    /// Resolved on the first deploy, after the chain id check
    sender: OnceCell<EvmAddress>,
}

impl EvmDeployBackend {
    /// Set up the provider without contacting the node.
    pub fn new(settings: EvmSettings) -> Result<Self, EvmError> {
        let url = reqwest::Url::parse(&settings.rpc_url).map_err(|e| EvmError::InvalidRpcUrl {
            url: settings.rpc_url.clone(),
            message: e.to_string(),
        })?;
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|e| EvmError::InvalidRpcUrl {
                url: settings.rpc_url.clone(),
                message: e.to_string(),
            })?;
        let runtime = RuntimeBuilder::new_current_thread()
            .enable_all()
            .build()
            .map_err(EvmError::Runtime)?;

        Ok(Self {
            provider: Provider::new(Http::new_with_client(url, client)),
            runtime,
            artifacts: ArtifactStore::new(settings.artifacts.clone()),
            settings,
            sender: OnceCell::new(),
        })
    }

    pub fn settings(&self) -> &EvmSettings {
        &self.settings
    }

    /// Build the creation payload for `step` without touching the network.
    pub fn creation_code(&self, step: &DeployStep) -> Result<Bytes, EvmError> {
        let artifact = self.artifacts.load(step.module_name())?;

        let mut libraries = BTreeMap::new();
        for (library, address) in step.link_map().iter() {
            libraries.insert(library.module().to_string(), parse_address(address.as_str())?);
        }

        let mut code = link(&artifact, &libraries)?;
        code.extend(encode_constructor_args(step.constructor_args())?);
        Ok(Bytes::from(code))
    }

    fn request<T>(
        &self,
        method: &'static str,
        request: impl Future<Output = Result<T, ProviderError>>,
    ) -> Result<T, EvmError> {
        self.runtime
            .block_on(request)
            .map_err(|source| EvmError::Provider { method, source })
    }

    fn sender(&self) -> Result<EvmAddress, EvmError> {
        if let Some(sender) = self.sender.get() {
            return Ok(*sender);
        }

        if let Some(expected) = self.settings.expected_chain_id {
            let actual = self.request("eth_chainId", self.provider.get_chainid())?;
            if actual != U256::from(expected) {
                return Err(EvmError::ChainMismatch { expected, actual });
            }
            debug!(chain_id = expected, "chain id verified");
        }

        let sender = match &self.settings.from {
            Some(from) => parse_address(from)?,
            None => self
                .request("eth_accounts", self.provider.get_accounts())?
                .into_iter()
                .next()
                .ok_or(EvmError::NoAccounts)?,
        };
        info!(sender = ?sender, rpc_url = %self.settings.rpc_url, "using sender account");

        Ok(*self.sender.get_or_init(|| sender))
    }

    /// Poll for the receipt of `tx_hash` until it lands or the timeout passes.
    ///
    /// The transaction is already on its way, so a failed poll is retried
    /// rather than ending the stage; every error from here names the hash.
    fn wait_for_contract(&self, tx_hash: H256) -> Result<Address, EvmError> {
        let hash = format!("{:#x}", tx_hash);
        let started = Instant::now();
        let mut last_error = None;

        loop {
            match self
                .runtime
                .block_on(self.provider.get_transaction_receipt(tx_hash))
            {
                Ok(Some(receipt)) => {
                    debug!(tx_hash = %hash, block = ?receipt.block_number, "receipt received");
                    if receipt.status == Some(U64::zero()) {
                        return Err(EvmError::Reverted { tx_hash: hash });
                    }
                    return match receipt.contract_address {
                        Some(address) => Ok(Address::new(format!("{:#x}", address))),
                        None => Err(EvmError::MissingContractAddress { tx_hash: hash }),
                    };
                }
                Ok(None) => {}
                Err(err) => {
                    warn!(tx_hash = %hash, error = %err, "receipt poll failed, retrying");
                    last_error = Some(err.to_string());
                }
            }

            let waited = started.elapsed();
            if waited >= self.settings.receipt_timeout {
                return Err(EvmError::ReceiptTimeout {
                    tx_hash: hash,
                    waited,
                    last_error,
                });
            }
            thread::sleep(self.settings.poll_interval);
        }
    }

    fn deploy_step(&self, step: &DeployStep) -> Result<Address, EvmError> {
        let _span = info_span!("deploy", module = step.module_name()).entered();

        let code = self.creation_code(step)?;
        let mut tx = TransactionRequest::new().from(self.sender()?).data(code);
        if let Some(gas) = self.settings.gas {
            tx = tx.gas(gas);
        }

        // Sent as-is: the node picks nonce, gas price and (unless set) gas.
        let tx_hash: H256 = self.request(
            "eth_sendTransaction",
            self.provider.request("eth_sendTransaction", [tx]),
        )?;
        info!(tx_hash = ?tx_hash, "creation transaction sent");

        self.wait_for_contract(tx_hash)
    }
}

impl DeployBackend for EvmDeployBackend {
    fn deploy(&self, step: &DeployStep) -> Result<Address, BackendError> {
        Ok(self.deploy_step(step)?)
    }

    fn validate_address(&self, value: &str) -> Result<(), String> {
        parse_address(value).map(|_| ()).map_err(|e| e.to_string())
    }
}
