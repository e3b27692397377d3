//! Run state machine
//!
//! ```text
//! NotStarted -> LoadingConfig -> Deploying(Library) -> Deploying(Ownership)
//!            -> Deploying(Authenticity) -> Complete
//! ```
//!
//! `Failed` is reachable from `LoadingConfig` and any `Deploying` state.
//! `Complete` and `Failed` are terminal.

use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::Stage;
use crate::error::{DeployError, DeployResult};

/// Where a run failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "phase", content = "stage")]
pub enum FailurePoint {
    Configuration,
    Stage(Stage),
}

impl FailurePoint {
    pub fn stage(&self) -> Option<Stage> {
        match self {
            FailurePoint::Configuration => None,
            FailurePoint::Stage(stage) => Some(*stage),
        }
    }
}

impl fmt::Display for FailurePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePoint::Configuration => write!(f, "configuration"),
            FailurePoint::Stage(stage) => write!(f, "{}", stage),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    NotStarted,
    LoadingConfig,
    Deploying(Stage),
    Complete,
    Failed(FailurePoint),
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Complete | RunState::Failed(_))
    }

    /// Move to `to`, rejecting anything off the fixed pipeline.
    pub fn advance(self, to: RunState) -> DeployResult<RunState> {
        let legal = match (self, to) {
            (RunState::NotStarted, RunState::LoadingConfig) => true,
            (RunState::LoadingConfig, RunState::Deploying(stage)) => stage == Stage::first(),
            (RunState::Deploying(current), RunState::Deploying(next)) => {
                current.next() == Some(next)
            }
            (RunState::Deploying(current), RunState::Complete) => current.next().is_none(),
            (RunState::LoadingConfig, RunState::Failed(FailurePoint::Configuration)) => true,
            (RunState::Deploying(current), RunState::Failed(FailurePoint::Stage(stage))) => {
                current == stage
            }
            _ => false,
        };

        if legal {
            Ok(to)
        } else {
            Err(DeployError::IllegalTransition { from: self, to })
        }
    }

    /// Move to the matching `Failed` state for wherever the run currently is.
    pub fn fail(self) -> DeployResult<RunState> {
        let point = match self {
            RunState::LoadingConfig => FailurePoint::Configuration,
            RunState::Deploying(stage) => FailurePoint::Stage(stage),
            _ => {
                return Err(DeployError::IllegalTransition {
                    from: self,
                    to: RunState::Failed(FailurePoint::Configuration),
                })
            }
        };
        self.advance(RunState::Failed(point))
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::NotStarted => write!(f, "not-started"),
            RunState::LoadingConfig => write!(f, "loading-config"),
            RunState::Deploying(stage) => write!(f, "deploying-{}", stage),
            RunState::Complete => write!(f, "complete"),
            RunState::Failed(point) => write!(f, "failed({})", point),
        }
    }
}
