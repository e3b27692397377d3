//! `authdeploy networks`

use std::path::PathBuf;

use anyhow::Result;

use authdeploy::config::NetworksFile;

use super::project_root;
use crate::ui::context::UiContext;

pub fn cmd_networks(networks_file: Option<PathBuf>, ui: &UiContext) -> Result<()> {
    let (file, source) = NetworksFile::discover(networks_file.as_deref(), &project_root()?)?;

    if !ui.json {
        match &source {
            Some(path) => println!("Networks from {}:", path.display()),
            None => println!("No networks file found; built-in profiles:"),
        }
    }

    for name in file.names() {
        let target = file.resolve(name)?;
        let profile = &target.profile;
        if ui.json {
            let output = serde_json::json!({
                "event": "network",
                "command": "networks",
                "name": name,
                "rpc_url": profile.rpc_url,
                "chain_id": profile.chain_id,
                "explorer_url": profile.explorer_url,
            });
            println!("{}", serde_json::to_string(&output)?);
        } else {
            let chain = profile
                .chain_id
                .map(|id| format!(" chain {}", id))
                .unwrap_or_default();
            println!("  {:<20} {}{}", name, profile.rpc_url, chain);
        }
    }
    Ok(())
}
