//! Deploy Use Case
//!
//! Runs the fixed pipeline:
//! 1. Bind configuration (load + backend address check)
//! 2. Deploy the library
//! 3. Deploy the ownership module, linked against the library
//! 4. Deploy the authenticity module, constructed with the ownership address
//!
//! Stages run strictly in order and the first failure ends the run. Nothing
//! is rolled back: deployments are irreversible, so a failure carries the
//! partial report instead.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::{keys, Configuration};
use crate::domain::entities::{DeployedModule, DeploymentReport, DeployStep, RunState};
use crate::domain::ports::{
    ConfigProvider, DeployBackend, DeployEvent, DeployEventSink, NoopEventSink,
};
use crate::domain::value_objects::{Address, Stage};
use crate::error::{ConfigurationError, DeployError, DeployFailure, DeployResult};

use super::steps::build_step;

/// Deploy use case - orchestrates one deployment run per call
///
/// Parameterized by its backend so tests can substitute a recording mock.
pub struct DeployUseCase<B>
where
    B: DeployBackend,
{
    backend: B,
    event_sink: Arc<dyn DeployEventSink>,
}

impl<B> DeployUseCase<B>
where
    B: DeployBackend,
{
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            event_sink: Arc::new(NoopEventSink),
        }
    }

    /// Report progress to `event_sink`
    pub fn with_event_sink(mut self, event_sink: Arc<dyn DeployEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load configuration from `provider`, then deploy every stage.
    ///
    /// If the configuration is incomplete no stage runs.
    pub fn run(
        &self,
        provider: &dyn ConfigProvider,
    ) -> Result<DeploymentReport, DeployFailure> {
        let run = Run::begin(self.event_sink.as_ref());
        match Configuration::load(provider) {
            Ok(config) => self.execute(run, &config),
            Err(err) => Err(run.fail(err.into())),
        }
    }

    /// Deploy every stage with an already-loaded configuration.
    ///
    /// Each call deploys a fresh set of modules; nothing is cached or
    /// deduplicated between calls.
    pub fn deploy_all(
        &self,
        config: &Configuration,
    ) -> Result<DeploymentReport, DeployFailure> {
        let run = Run::begin(self.event_sink.as_ref());
        self.execute(run, config)
    }

    fn execute(
        &self,
        mut run: Run<'_>,
        config: &Configuration,
    ) -> Result<DeploymentReport, DeployFailure> {
        if let Err(reason) = self.backend.validate_address(config.owner.as_str()) {
            let err = ConfigurationError::Invalid {
                key: keys::OWNER.to_string(),
                reason,
            };
            return Err(run.fail(err.into()));
        }
        run.emit(DeployEvent::ConfigurationLoaded);

        for stage in Stage::ALL {
            if let Err(err) = run.enter(stage) {
                return Err(run.fail(err));
            }

            let step = match build_step(stage, config, run.report()) {
                Ok(step) => step,
                Err(err) => return Err(run.fail(err)),
            };

            info!(
                stage = %stage,
                module = step.module_name(),
                args = step.constructor_args().len(),
                "deploying module"
            );

            let address = match self.backend.deploy(&step) {
                Ok(address) => address,
                Err(err) => {
                    warn!(stage = %stage, error = %err, "deployment failed");
                    return Err(run.fail(DeployError::Deployment {
                        stage,
                        message: err.message,
                    }));
                }
            };

            if let Err(err) = run.record(step, address) {
                return Err(run.fail(err));
            }
        }

        run.complete()
    }
}

/// Mutable state of a single run.
struct Run<'a> {
    state: RunState,
    report: DeploymentReport,
    events: &'a dyn DeployEventSink,
}

impl<'a> Run<'a> {
    fn begin(events: &'a dyn DeployEventSink) -> Self {
        events.on_event(DeployEvent::Started {
            stage_count: Stage::ALL.len(),
        });
        Self {
            state: RunState::LoadingConfig,
            report: DeploymentReport::new(),
            events,
        }
    }

    fn emit(&self, event: DeployEvent) {
        self.events.on_event(event);
    }

    fn report(&self) -> &DeploymentReport {
        &self.report
    }

    fn enter(&mut self, stage: Stage) -> DeployResult<()> {
        self.state = self.state.advance(RunState::Deploying(stage))?;
        debug!(state = %self.state, "run advanced");
        self.emit(DeployEvent::StageStarted { stage });
        Ok(())
    }

    fn record(&mut self, step: DeployStep, address: Address) -> DeployResult<()> {
        let stage = step.stage();
        let module = DeployedModule::new(stage, address.clone())
            .with_constructor_args(step.constructor_args().to_vec());

        self.report
            .record(module)
            .map_err(|rejected| DeployError::IllegalTransition {
                from: self.state,
                to: RunState::Deploying(rejected.stage),
            })?;

        info!(stage = %stage, address = %address, "module deployed");
        self.emit(DeployEvent::StageDeployed { stage, address });
        Ok(())
    }

    fn complete(mut self) -> Result<DeploymentReport, DeployFailure> {
        match self.state.advance(RunState::Complete) {
            Ok(state) => {
                self.state = state;
                self.emit(DeployEvent::Completed {
                    deployed_count: self.report.len(),
                });
                Ok(self.report)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    fn fail(self, error: DeployError) -> DeployFailure {
        let stage = match self.state {
            RunState::Deploying(stage) => Some(stage),
            _ => None,
        };

        if let Some(stage) = stage {
            self.emit(DeployEvent::StageFailed {
                stage,
                error: error.to_string(),
            });
        }

        let state = self.state.fail().unwrap_or(self.state);
        self.emit(DeployEvent::Failed {
            stage,
            error: error.to_string(),
            deployed_count: self.report.len(),
        });

        DeployFailure {
            error,
            state,
            report: self.report,
        }
    }
}
