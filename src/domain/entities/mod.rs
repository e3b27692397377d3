//! Domain Entities
//!
//! - `DeployStep` / `LinkMap` - input to one backend call
//! - `DeployedModule` - a module the backend reported live
//! - `DeploymentReport` - ordered record of one run
//! - `RunState` - per-run state machine

mod deploy_step;
mod deployed_module;
mod report;
mod run_state;

pub use deploy_step::{DeployStep, LinkMap};
pub use deployed_module::DeployedModule;
pub use report::DeploymentReport;
pub use run_state::{FailurePoint, RunState};
