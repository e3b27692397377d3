//! Deployed module entity

use serde::Serialize;

use crate::domain::value_objects::{Address, ConstructorArg, Stage};

/// A module that the backend reported as live at `address`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployedModule {
    pub stage: Stage,
    pub address: Address,
    /// Arguments the module was constructed with, kept for manual verification
    pub constructor_args: Vec<ConstructorArg>,
}

impl DeployedModule {
    pub fn new(stage: Stage, address: Address) -> Self {
        Self {
            stage,
            address,
            constructor_args: Vec::new(),
        }
    }

    pub fn with_constructor_args(mut self, args: Vec<ConstructorArg>) -> Self {
        self.constructor_args = args;
        self
    }

    /// Symbolic name (`library`, `ownership`, `authenticity`)
    pub fn name(&self) -> &'static str {
        self.stage.name()
    }

    /// Compiled module name
    pub fn module_name(&self) -> &'static str {
        self.stage.module()
    }
}
