//! Deploy Module
//!
//! Orchestrates the three-stage deployment.
//!
//! ## Structure
//!
//! - `steps` - Builds each stage's `DeployStep` from prior addresses
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use authdeploy::application::deploy::DeployUseCase;
//!
//! let use_case = DeployUseCase::new(backend).with_event_sink(sink);
//! let report = use_case.run(&provider)?;
//! ```

mod steps;
mod use_case;

pub use crate::error::DeployFailure;
pub use steps::build_step;
pub use use_case::DeployUseCase;
