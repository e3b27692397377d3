//! Deploy step construction
//!
//! Each stage's inputs are literal addresses of earlier stages, which is why
//! the pipeline cannot be reordered or parallelised.

use crate::config::Configuration;
use crate::domain::entities::{DeployStep, DeploymentReport, LinkMap};
use crate::domain::value_objects::{Address, ConstructorArg, Stage};
use crate::error::{DeployError, DeployResult};

/// Build the step for `stage` from the configuration and what is deployed so far.
pub fn build_step(
    stage: Stage,
    config: &Configuration,
    deployed: &DeploymentReport,
) -> DeployResult<DeployStep> {
    let require = |dependency: Stage| -> DeployResult<Address> {
        deployed
            .address_of(dependency)
            .cloned()
            .ok_or(DeployError::DependencyUnavailable { stage, dependency })
    };

    let step = match stage {
        Stage::Library => DeployStep::new(stage),
        Stage::Ownership => DeployStep::new(stage)
            .with_link_map(LinkMap::new().with(Stage::Library, require(Stage::Library)?))
            .with_arg(ConstructorArg::Address(config.owner.clone())),
        Stage::Authenticity => {
            let [certificate, signing_domain, signature_version] = config.authenticity_args();
            DeployStep::new(stage)
                .with_arg(ConstructorArg::Address(require(Stage::Ownership)?))
                .with_arg(certificate)
                .with_arg(signing_domain)
                .with_arg(signature_version)
        }
    };

    step.link_map().validate_for(stage)?;
    Ok(step)
}
