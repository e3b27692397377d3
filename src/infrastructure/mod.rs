//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `env` - Configuration from the environment and `.env` files
//! - `events/` - Event sinks (NDJSON)
//! - `evm/` - JSON-RPC deployment backend
//! - `record_store` - Deployment record file

pub mod env;
pub mod events;
pub mod evm;
pub mod record_store;

// Re-export for convenience
pub use env::{DotenvError, EnvConfigProvider};
pub use events::JsonEventSink;
pub use evm::{EvmDeployBackend, EvmError, EvmSettings};
pub use record_store::{write_record, RecordWriteError};
