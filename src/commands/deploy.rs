//! `authdeploy deploy`

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, warn};

use authdeploy::application::DeploymentRecord;
use authdeploy::domain::ports::DeployEventSink;
use authdeploy::infrastructure::{write_record, EnvConfigProvider, JsonEventSink};
use authdeploy::presentation::output::{render_partial_report, render_verification_hints};
use authdeploy::presentation::{
    create_deploy_use_case, resolve_network, resolve_sender, ConsoleEventSink, NetworkArgs,
};

use super::project_root;
use crate::ui::context::UiContext;

pub struct DeployArgs {
    pub network: NetworkArgs,
    pub from: Option<String>,
    pub artifacts: PathBuf,
    pub record: Option<PathBuf>,
}

/// Deploy command entry point
pub fn cmd_deploy(args: DeployArgs, provider: &EnvConfigProvider, ui: &UiContext) -> Result<()> {
    let resolved = resolve_network(&args.network, provider, &project_root()?)?;
    let target = resolved.target;
    info!(
        network = %target.name,
        rpc_url = %target.profile.rpc_url,
        networks_file = ?resolved.source,
        "network selected"
    );

    let sink: Arc<dyn DeployEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        println!(
            "Deploying to {} ({})",
            target.name, target.profile.rpc_url
        );
        Arc::new(ConsoleEventSink::stdout(ui.style()).with_profile(target.profile.clone()))
    };

    let use_case = create_deploy_use_case(
        &target,
        args.artifacts,
        resolve_sender(args.from.as_deref(), provider),
        sink,
    )?;
    let outcome = use_case.run(provider);

    if let Some(path) = &args.record {
        let record = DeploymentRecord::from_outcome(&target, &outcome, Utc::now());
        save_record(path, &record, outcome.is_ok())?;
    }

    match outcome {
        Ok(report) => {
            if !ui.json && ui.verbose > 0 {
                print!("{}", render_verification_hints(&report));
            }
            Ok(())
        }
        Err(failure) => {
            if !ui.json && !failure.is_configuration_error() {
                eprintln!(
                    "{}",
                    render_partial_report(&failure.report, Some(&target.profile), ui.style())
                );
            }
            Err(anyhow::Error::new(failure).context("Deployment failed"))
        }
    }
}

/// After a failed run the deploy error matters more than the record, so a
/// write failure is only logged.
fn save_record(path: &Path, record: &DeploymentRecord, succeeded: bool) -> Result<()> {
    match write_record(path, record) {
        Ok(()) => Ok(()),
        Err(err) if !succeeded => {
            warn!(error = %err, "could not write deployment record");
            Ok(())
        }
        Err(err) => Err(err).context("modules were deployed, but the record was not saved"),
    }
}
