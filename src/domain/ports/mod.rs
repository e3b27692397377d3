//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod config_provider;
pub mod deploy_backend;
pub mod deploy_events;

pub use config_provider::{ConfigProvider, MapConfigProvider};
pub use deploy_backend::{BackendError, DeployBackend};
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
