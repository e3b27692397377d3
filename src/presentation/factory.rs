//! Use Case Factory
//!
//! Wires the deploy use case to the EVM backend and resolves the target
//! network from flags, environment and networks file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::DeployUseCase;
use crate::config::{keys, NetworkConfigError, NetworkTarget, NetworksFile, LOCALHOST};
use crate::domain::ports::{ConfigProvider, DeployEventSink};
use crate::infrastructure::{EvmDeployBackend, EvmError, EvmSettings};
use crate::presentation::cli::NetworkArgs;

/// A resolved network and the file it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNetwork {
    pub target: NetworkTarget,
    pub source: Option<PathBuf>,
}

/// Pick the network for this run.
///
/// Name: `--network`, then `AUTHDEPLOY_NETWORK`, then `localhost`.
/// RPC URL: `--rpc-url`, then `AUTHDEPLOY_RPC_URL`, then the profile's own.
pub fn resolve_network(
    args: &NetworkArgs,
    provider: &dyn ConfigProvider,
    project_root: &Path,
) -> Result<ResolvedNetwork, NetworkConfigError> {
    let (file, source) = NetworksFile::discover(args.networks_file.as_deref(), project_root)?;

    let name = args
        .network
        .clone()
        .or_else(|| non_empty(provider.get(keys::NETWORK)))
        .unwrap_or_else(|| LOCALHOST.to_string());
    let mut target = file.resolve(&name)?;

    if let Some(rpc_url) = args
        .rpc_url
        .clone()
        .or_else(|| non_empty(provider.get(keys::RPC_URL)))
    {
        target = target.with_rpc_url(rpc_url);
    }

    Ok(ResolvedNetwork { target, source })
}

/// Sender account: `--from`, then `AUTHDEPLOY_FROM`
pub fn resolve_sender(from: Option<&str>, provider: &dyn ConfigProvider) -> Option<String> {
    from.map(str::to_string)
        .or_else(|| non_empty(provider.get(keys::FROM)))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Create a DeployUseCase backed by a JSON-RPC node
pub fn create_deploy_use_case(
    target: &NetworkTarget,
    artifacts: impl Into<PathBuf>,
    from: Option<String>,
    event_sink: Arc<dyn DeployEventSink>,
) -> Result<DeployUseCase<EvmDeployBackend>, EvmError> {
    let settings = EvmSettings::from_profile(&target.profile, artifacts).with_from(from);
    let backend = EvmDeployBackend::new(settings)?;
    Ok(DeployUseCase::new(backend).with_event_sink(event_sink))
}
