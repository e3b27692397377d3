//! `authdeploy check` - everything `deploy` verifies before its first transaction

use std::path::PathBuf;

use anyhow::{Context, Result};

use authdeploy::config::Configuration;
use authdeploy::domain::value_objects::Stage;
use authdeploy::infrastructure::evm::abi::parse_address;
use authdeploy::infrastructure::EnvConfigProvider;
use authdeploy::infrastructure::evm::artifact::ArtifactStore;
use authdeploy::presentation::{resolve_network, NetworkArgs};

use super::project_root;
use crate::ui::context::UiContext;

pub fn cmd_check(
    network: NetworkArgs,
    artifacts: PathBuf,
    provider: &EnvConfigProvider,
    ui: &UiContext,
) -> Result<()> {
    let config = Configuration::load(provider)?;
    parse_address(config.owner.as_str()).context("invalid value for OWNER")?;

    let resolved = resolve_network(&network, provider, &project_root()?)?;

    let store = ArtifactStore::new(&artifacts);
    let mut found = Vec::new();
    for stage in Stage::ALL {
        let artifact = store
            .load(stage.module())
            .with_context(|| format!("{} is not deployable", stage.module()))?;
        found.push((stage, artifact.bytecode.len().saturating_sub(2) / 2));
    }

    if ui.json {
        let output = serde_json::json!({
            "event": "check",
            "command": "check",
            "network": resolved.target.name,
            "rpc_url": resolved.target.profile.rpc_url,
            "chain_id": resolved.target.profile.chain_id,
            "owner": config.owner,
            "modules": found.iter().map(|(stage, _)| stage.module()).collect::<Vec<_>>(),
            "success": true,
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("Network:  {} ({})", resolved.target.name, resolved.target.profile.rpc_url);
    if let Some(path) = &resolved.source {
        println!("Profiles: {}", path.display());
    }
    println!("Owner:    {}", config.owner);
    println!(
        "Authenticity domain: {} v{} (certificate {})",
        config.signing_domain, config.signature_version, config.certificate
    );
    for (stage, size) in found {
        println!("  {} artifact ok ({} bytes)", stage.module(), size);
    }
    println!("Ready to deploy.");
    Ok(())
}
