//! Common test utilities for authdeploy CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project directory, home directory and environment
//! - Fixtures: minimal Hardhat artifacts and JSON-RPC mock helpers

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
