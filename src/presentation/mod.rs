//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text; JSON lives in infrastructure)
//!
//! ## Structure
//!
//! - `cli` - Command-line interface definition
//! - `factory` - Network resolution and use case wiring
//! - `output` - Console rendering and the console event sink

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, ColorWhen, Commands, NetworkArgs};
pub use factory::{create_deploy_use_case, resolve_network, resolve_sender, ResolvedNetwork};
pub use output::{ConsoleEventSink, ConsoleStyle};
