//! EVM deployment backend
//!
//! - `artifact` - Hardhat artifact lookup and parsing
//! - `linker` - library address splicing
//! - `abi` - constructor arguments as `ethers` ABI tokens
//! - `backend` - `DeployBackend` implementation over an `ethers` provider

pub mod abi;
pub mod artifact;
mod backend;
mod error;
pub mod linker;

pub use backend::{EvmDeployBackend, EvmSettings};
pub use error::{AbiError, EvmError, LinkError};
