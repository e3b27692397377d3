//! Network profiles
//!
//! The target network is always an explicit input: a named profile from a
//! networks file (or the built-in `localhost`), optionally with its RPC URL
//! overridden on the command line.
//!
//! ```toml
//! [networks.base-sepolia]
//! rpc_url = "https://sepolia.base.org"
//! chain_id = 84532
//! explorer_url = "https://sepolia.basescan.org"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::suggest::suggest;
use crate::domain::value_objects::Address;

/// Project-level networks file name
pub const PROJECT_NETWORKS_FILE: &str = "authdeploy.toml";

/// Name of the always-available local development profile
pub const LOCALHOST: &str = "localhost";

#[derive(Error, Debug)]
pub enum NetworkConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid networks file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("unknown network '{name}'{}", did_you_mean(.suggestion))]
    UnknownNetwork {
        name: String,
        suggestion: Option<String>,
    },

    #[error("network '{name}' has an empty rpc_url")]
    EmptyRpcUrl { name: String },
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(". Did you mean '{}'?", s))
        .unwrap_or_default()
}

/// Connection and chain metadata for one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkProfile {
    pub rpc_url: String,

    /// Expected chain id; checked against the node before deploying
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,

    /// Block explorer base URL, used for address links in reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    #[serde(default = "default_receipt_timeout_secs")]
    pub receipt_timeout_secs: u64,

    /// Gas limit for deployment transactions; the node estimates when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<u64>,
}

fn default_poll_interval_ms() -> u64 {
    1000
}

fn default_receipt_timeout_secs() -> u64 {
    120
}

impl NetworkProfile {
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            chain_id: None,
            explorer_url: None,
            poll_interval_ms: default_poll_interval_ms(),
            receipt_timeout_secs: default_receipt_timeout_secs(),
            gas: None,
        }
    }

    /// Built-in profile for a local Hardhat/Anvil node
    pub fn localhost() -> Self {
        Self {
            chain_id: Some(31337),
            poll_interval_ms: 250,
            ..Self::new("http://127.0.0.1:8545")
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn receipt_timeout(&self) -> Duration {
        Duration::from_secs(self.receipt_timeout_secs)
    }

    /// Explorer page for a deployed address, if this network has an explorer
    pub fn explorer_link(&self, address: &Address) -> Option<String> {
        self.explorer_url
            .as_deref()
            .map(|base| format!("{}/address/{}#code", base.trim_end_matches('/'), address))
    }
}

/// A resolved network: its name plus the profile to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkTarget {
    pub name: String,
    pub profile: NetworkProfile,
}

impl NetworkTarget {
    /// Replace the profile's RPC URL (e.g. from `--rpc-url`)
    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.profile.rpc_url = rpc_url.into();
        self
    }
}

/// Contents of a networks file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworksFile {
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkProfile>,
}

impl NetworksFile {
    pub fn parse(content: &str, path: &Path) -> Result<Self, NetworkConfigError> {
        toml::from_str(content).map_err(|e| NetworkConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, NetworkConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| NetworkConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Load the first networks file found, or an empty set.
    ///
    /// Search order:
    /// 1. `explicit` (must exist)
    /// 2. `<project_root>/authdeploy.toml`
    /// 3. `<config dir>/authdeploy/networks.toml`
    pub fn discover(
        explicit: Option<&Path>,
        project_root: &Path,
    ) -> Result<(Self, Option<PathBuf>), NetworkConfigError> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        let mut candidates = vec![project_root.join(PROJECT_NETWORKS_FILE)];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("authdeploy").join("networks.toml"));
        }

        for candidate in candidates {
            if candidate.is_file() {
                return Ok((Self::load(&candidate)?, Some(candidate)));
            }
        }

        Ok((Self::default(), None))
    }

    /// Profile names, including the built-in `localhost`
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.networks.keys().map(String::as_str).collect();
        if !self.networks.contains_key(LOCALHOST) {
            names.push(LOCALHOST);
            names.sort_unstable();
        }
        names
    }

    /// Resolve `name` to a profile.
    ///
    /// `localhost` falls back to the built-in profile unless the file
    /// defines its own.
    pub fn resolve(&self, name: &str) -> Result<NetworkTarget, NetworkConfigError> {
        let profile = match self.networks.get(name) {
            Some(profile) => profile.clone(),
            None if name == LOCALHOST => NetworkProfile::localhost(),
            None => {
                return Err(NetworkConfigError::UnknownNetwork {
                    name: name.to_string(),
                    suggestion: suggest(name, self.names()).map(str::to_string),
                })
            }
        };

        if profile.rpc_url.trim().is_empty() {
            return Err(NetworkConfigError::EmptyRpcUrl {
                name: name.to_string(),
            });
        }

        Ok(NetworkTarget {
            name: name.to_string(),
            profile,
        })
    }
}
