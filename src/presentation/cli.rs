//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose) are inherited by all subcommands
//! - Flags that name the network are optional here; the environment and the
//!   networks file fill the gaps (see `factory::resolve_network`)

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// authdeploy - deploy the Ownership/Authenticity contract suite in order
#[derive(Parser, Debug)]
#[command(name = "authdeploy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON event stream)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to deploy and how to reach the node
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkArgs {
    /// Network profile name (default: $AUTHDEPLOY_NETWORK, then localhost)
    #[arg(short, long)]
    pub network: Option<String>,

    /// Override the profile's RPC URL
    #[arg(long, value_name = "URL")]
    pub rpc_url: Option<String>,

    /// Networks file (default: ./authdeploy.toml, then the user config dir)
    #[arg(long, value_name = "PATH")]
    pub networks_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy OwnershipLib, Ownership and Authenticity, in that order
    Deploy {
        #[command(flatten)]
        network: NetworkArgs,

        /// Sender account managed by the node (default: its first account)
        #[arg(long, value_name = "ADDRESS")]
        from: Option<String>,

        /// Hardhat artifacts directory
        #[arg(long, default_value = "artifacts", value_name = "DIR")]
        artifacts: PathBuf,

        /// Read configuration from this dotenv file instead of ./.env
        #[arg(long, value_name = "PATH")]
        env_file: Option<PathBuf>,

        /// Write a JSON deployment record here (also on failure)
        #[arg(long, value_name = "PATH")]
        record: Option<PathBuf>,
    },

    /// Validate configuration, network selection and artifacts without deploying
    Check {
        #[command(flatten)]
        network: NetworkArgs,

        /// Hardhat artifacts directory
        #[arg(long, default_value = "artifacts", value_name = "DIR")]
        artifacts: PathBuf,

        /// Read configuration from this dotenv file instead of ./.env
        #[arg(long, value_name = "PATH")]
        env_file: Option<PathBuf>,
    },

    /// List known network profiles
    Networks {
        /// Networks file (default: ./authdeploy.toml, then the user config dir)
        #[arg(long, value_name = "PATH")]
        networks_file: Option<PathBuf>,
    },
}

impl Commands {
    /// Dotenv file named by `--env-file`, if the command takes one
    pub fn env_file(&self) -> Option<&Path> {
        match self {
            Commands::Deploy { env_file, .. } | Commands::Check { env_file, .. } => {
                env_file.as_deref()
            }
            Commands::Networks { .. } => None,
        }
    }
}
