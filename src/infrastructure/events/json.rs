//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Started { stage_count } => {
                serde_json::json!({
                    "event": "start",
                    "command": "deploy",
                    "stage_count": stage_count,
                })
            }

            DeployEvent::ConfigurationLoaded => {
                serde_json::json!({
                    "event": "config_loaded",
                    "command": "deploy",
                })
            }

            DeployEvent::StageStarted { stage } => {
                serde_json::json!({
                    "event": "stage_start",
                    "command": "deploy",
                    "stage": stage,
                    "module": stage.module(),
                })
            }

            DeployEvent::StageDeployed { stage, address } => {
                serde_json::json!({
                    "event": "stage_deployed",
                    "command": "deploy",
                    "stage": stage,
                    "module": stage.module(),
                    "address": address,
                })
            }

            DeployEvent::StageFailed { stage, error } => {
                serde_json::json!({
                    "event": "stage_failed",
                    "command": "deploy",
                    "stage": stage,
                    "module": stage.module(),
                    "error": error,
                })
            }

            DeployEvent::Completed { deployed_count } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "deploy",
                    "status": "success",
                    "deployed": deployed_count,
                })
            }

            DeployEvent::Failed {
                stage,
                error,
                deployed_count,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "deploy",
                    "status": "failed",
                    "stage": stage,
                    "error": error,
                    "deployed": deployed_count,
                })
            }
        };

        self.write_event(json);
    }
}
