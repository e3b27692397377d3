//! Deploy Event Port
//!
//! Provides an observable interface for deployment runs.
//! Enables progress reporting, JSON event streams, and debugging.

use crate::domain::value_objects::{Address, Stage};

/// Event emitted during a deployment run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Run started
    Started { stage_count: usize },

    /// Required configuration was loaded and validated
    ConfigurationLoaded,

    /// A stage's backend call is about to be made
    StageStarted { stage: Stage },

    /// A stage's module is live
    StageDeployed { stage: Stage, address: Address },

    /// A stage's backend call failed
    StageFailed { stage: Stage, error: String },

    /// All stages deployed
    Completed { deployed_count: usize },

    /// Run ended in failure
    Failed {
        stage: Option<Stage>,
        error: String,
        deployed_count: usize,
    },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Test event sink that records all events
    struct RecordingEventSink {
        events: Arc<Mutex<Vec<DeployEvent>>>,
    }

    impl DeployEventSink for RecordingEventSink {
        fn on_event(&self, event: DeployEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = RecordingEventSink {
            events: events.clone(),
        };

        sink.on_event(DeployEvent::Started { stage_count: 3 });
        sink.on_event(DeployEvent::StageStarted {
            stage: Stage::Library,
        });

        let recorded = events.lock().unwrap();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[1], DeployEvent::StageStarted { stage: Stage::Library });
    }
}
