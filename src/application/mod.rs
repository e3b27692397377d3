//! Application Layer
//!
//! Use cases that orchestrate the deployment flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Does NOT talk to a node or the file system itself
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Loads configuration and deploys the three stages in order
//! - `DeploymentRecord` - Summary of a finished run for `--record`

pub mod deploy;
pub mod record;

pub use deploy::{build_step, DeployFailure, DeployUseCase};
pub use record::{DeploymentRecord, RecordStatus, RecordedModule};
