//! authdeploy CLI - deploys OwnershipLib, Ownership and Authenticity in order
//!
//! Usage: authdeploy <COMMAND>
//!
//! Commands:
//!   deploy    Deploy the three modules, threading addresses between them
//!   check     Validate configuration, network and artifacts
//!   networks  List known network profiles

mod commands;
mod logging;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use authdeploy::config::keys;
use authdeploy::domain::ports::ConfigProvider;
use authdeploy::presentation::{Cli, Commands};
use commands::deploy::DeployArgs;
use ui::context::UiContext;

fn main() -> Result<()> {
    let cli = Cli::parse();
    // `.env` first, so `AUTHDEPLOY_LOG` set there reaches the filter
    let provider = commands::load_provider(cli.command.env_file())?;
    logging::init(cli.verbose, provider.get(keys::LOG).as_deref());
    debug!(dotenv = ?provider.dotenv_path(), "configuration loaded");
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);

    match cli.command {
        Commands::Deploy {
            network,
            from,
            artifacts,
            record,
            ..
        } => commands::deploy::cmd_deploy(
            DeployArgs {
                network,
                from,
                artifacts,
                record,
            },
            &provider,
            &ui,
        ),
        Commands::Check {
            network, artifacts, ..
        } => commands::check::cmd_check(network, artifacts, &provider, &ui),
        Commands::Networks { networks_file } => {
            commands::networks::cmd_networks(networks_file, &ui)
        }
    }
}
