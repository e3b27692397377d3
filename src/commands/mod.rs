//! Subcommand entry points

pub mod check;
pub mod deploy;
pub mod networks;

use std::path::Path;

use anyhow::{Context, Result};
use authdeploy::infrastructure::EnvConfigProvider;

/// Environment provider, seeded from `env_file` or `./.env` when present
pub fn load_provider(env_file: Option<&Path>) -> Result<EnvConfigProvider> {
    let provider = match env_file {
        Some(path) => EnvConfigProvider::with_dotenv(path)?,
        None => EnvConfigProvider::from_default_dotenv()?,
    };
    Ok(provider)
}

fn project_root() -> Result<std::path::PathBuf> {
    std::env::current_dir().context("failed to determine the current directory")
}
