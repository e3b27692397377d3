//! Deployment record
//!
//! A JSON summary of one run, written after the run ends (successfully or
//! not) so the deployed addresses and their constructor arguments are kept
//! somewhere other than a terminal scrollback.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::config::NetworkTarget;
use crate::domain::entities::{DeployedModule, DeploymentReport};
use crate::domain::value_objects::{Address, ConstructorArg, Stage};
use crate::error::DeployFailure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Complete,
    Failed,
}

/// One deployed module as it appears in the record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordedModule {
    pub stage: Stage,
    pub module: &'static str,
    pub address: Address,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub constructor_args: Vec<ConstructorArg>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentRecord {
    pub network: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    pub deployed_at: String,
    pub status: RecordStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_stage: Option<Stage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub modules: Vec<RecordedModule>,
}

impl DeploymentRecord {
    /// Build the record for a finished run.
    pub fn from_outcome(
        target: &NetworkTarget,
        outcome: &Result<DeploymentReport, DeployFailure>,
        at: DateTime<Utc>,
    ) -> Self {
        let (report, status, failed_stage, error) = match outcome {
            Ok(report) => (report, RecordStatus::Complete, None, None),
            Err(failure) => (
                &failure.report,
                RecordStatus::Failed,
                failure.failed_stage(),
                Some(failure.to_string()),
            ),
        };

        Self {
            network: target.name.clone(),
            chain_id: target.profile.chain_id,
            deployed_at: at.to_rfc3339_opts(SecondsFormat::Secs, true),
            status,
            failed_stage,
            error,
            modules: report
                .iter()
                .map(|module| RecordedModule::new(module, target))
                .collect(),
        }
    }
}

impl RecordedModule {
    fn new(module: &DeployedModule, target: &NetworkTarget) -> Self {
        Self {
            stage: module.stage,
            module: module.module_name(),
            address: module.address.clone(),
            constructor_args: module.constructor_args.clone(),
            explorer_url: target.profile.explorer_link(&module.address),
        }
    }
}
