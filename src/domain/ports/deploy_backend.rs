//! Deployment backend port - turns a `DeployStep` into a live address.

use thiserror::Error;

use crate::domain::entities::DeployStep;
use crate::domain::value_objects::Address;

/// Failure reported by a backend.
///
/// The message is the backend's own diagnostic and is surfaced verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct BackendError {
    pub message: String,
}

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Deploys modules to a target network.
///
/// Each call blocks until the module is live (or has definitely failed).
/// Retries, gas adjustment and connection state all belong to the
/// implementation; the orchestrator never retries.
pub trait DeployBackend {
    /// Deploy one module, linking `step.link_map()` and passing
    /// `step.constructor_args()` positionally.
    fn deploy(&self, step: &DeployStep) -> Result<Address, BackendError>;

    /// Check that `value` is a well-formed address for this backend's chain.
    ///
    /// Called on configured addresses before any deployment so a malformed
    /// owner fails the run with nothing deployed.
    fn validate_address(&self, _value: &str) -> Result<(), String> {
        Ok(())
    }
}

impl<B: DeployBackend + ?Sized> DeployBackend for &B {
    fn deploy(&self, step: &DeployStep) -> Result<Address, BackendError> {
        (**self).deploy(step)
    }

    fn validate_address(&self, value: &str) -> Result<(), String> {
        (**self).validate_address(value)
    }
}

impl<B: DeployBackend + ?Sized> DeployBackend for Box<B> {
    fn deploy(&self, step: &DeployStep) -> Result<Address, BackendError> {
        (**self).deploy(step)
    }

    fn validate_address(&self, value: &str) -> Result<(), String> {
        (**self).validate_address(value)
    }
}
