//! Terminal UI helpers for the CLI

pub mod context;
pub mod terminal;
