//! Error types for authdeploy
//!
//! Library errors use `thiserror`; the CLI layer wraps them in `anyhow`.

use thiserror::Error;

use crate::domain::entities::{DeploymentReport, RunState};
use crate::domain::value_objects::Stage;

/// Result type alias for orchestrator operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Required configuration could not be bound.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// One or more required keys are absent or empty
    #[error("missing required configuration: {}", keys.join(", "))]
    Missing { keys: Vec<String> },

    /// A key is present but its value is unusable
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

/// Errors that end a deployment run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeployError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The backend failed to deploy a stage
    #[error("{stage} deployment failed: {message}")]
    Deployment { stage: Stage, message: String },

    /// A stage was built before one of its dependencies was deployed
    #[error("{stage} requires {dependency}, which has not been deployed")]
    DependencyUnavailable { stage: Stage, dependency: Stage },

    /// A link map names a library the stage does not link against
    #[error("{stage} does not link against {library}")]
    UnexpectedLink { stage: Stage, library: Stage },

    /// The run state machine was driven out of order
    #[error("illegal run transition from {from} to {to}")]
    IllegalTransition { from: RunState, to: RunState },
}

impl DeployError {
    /// Stage the error is attributed to, if any
    pub fn stage(&self) -> Option<Stage> {
        match self {
            DeployError::Deployment { stage, .. }
            | DeployError::DependencyUnavailable { stage, .. }
            | DeployError::UnexpectedLink { stage, .. } => Some(*stage),
            DeployError::Configuration(_) | DeployError::IllegalTransition { .. } => None,
        }
    }
}

/// A failed run, carrying everything that was deployed before the failure.
///
/// Deployments are irreversible, so the partial report is what an operator
/// needs to resume by hand.
#[derive(Error, Debug, Clone)]
#[error("{error}")]
pub struct DeployFailure {
    #[source]
    pub error: DeployError,
    /// Terminal state of the run (always `RunState::Failed`)
    pub state: RunState,
    /// Modules deployed before the failure, in deployment order
    pub report: DeploymentReport,
}

impl DeployFailure {
    /// Stage that was being deployed when the run failed
    pub fn failed_stage(&self) -> Option<Stage> {
        match self.state {
            RunState::Failed(point) => point.stage(),
            _ => self.error.stage(),
        }
    }

    pub fn is_configuration_error(&self) -> bool {
        matches!(self.error, DeployError::Configuration(_))
    }
}
