//! Configuration module for authdeploy
//!
//! Two kinds of configuration:
//! - `Configuration`: the four required deployment parameters, read once
//!   from a `ConfigProvider` (environment, optionally seeded from `.env`)
//! - `NetworksFile`: named network profiles (TOML)
//!
//! Precedence for the network: CLI flags, then `AUTHDEPLOY_*` environment
//! variables, then the networks file, then built-in defaults.

mod configuration;
mod network;
mod suggest;

pub use configuration::{keys, Configuration};
pub use network::{
    NetworkConfigError, NetworkProfile, NetworkTarget, NetworksFile, LOCALHOST,
    PROJECT_NETWORKS_FILE,
};
pub use suggest::{levenshtein, suggest};
