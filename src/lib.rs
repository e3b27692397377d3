//! authdeploy - dependency-ordered deployment of the Ownership/Authenticity suite
//!
//! Three modules are deployed strictly in order, each one's address feeding
//! the next:
//!
//! 1. `OwnershipLib` (library)
//! 2. `Ownership`, linked against the library, constructed with the owner
//! 3. `Authenticity`, constructed with the ownership address, certificate,
//!    signing domain and signature version

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployUseCase, DeploymentRecord};
pub use config::{Configuration, NetworkProfile, NetworkTarget, NetworksFile};
pub use domain::entities::{DeployStep, DeployedModule, DeploymentReport, LinkMap, RunState};
pub use domain::ports::{BackendError, ConfigProvider, DeployBackend, MapConfigProvider};
pub use domain::value_objects::{Address, ConstructorArg, Stage};
pub use error::{ConfigurationError, DeployError, DeployFailure, DeployResult};
