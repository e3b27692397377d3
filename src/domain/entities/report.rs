//! Deployment report entity

use serde::Serialize;

use super::DeployedModule;
use crate::domain::value_objects::{Address, Stage};

/// Modules deployed during one run, in deployment order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeploymentReport {
    modules: Vec<DeployedModule>,
}

impl DeploymentReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a deployed module.
    ///
    /// Returns the module back if it would break stage order (a stage that
    /// is already recorded, or one that comes before the last recorded stage).
    pub fn record(&mut self, module: DeployedModule) -> Result<(), DeployedModule> {
        if let Some(last) = self.modules.last() {
            if module.stage <= last.stage {
                return Err(module);
            }
        }
        self.modules.push(module);
        Ok(())
    }

    pub fn get(&self, stage: Stage) -> Option<&DeployedModule> {
        self.modules.iter().find(|m| m.stage == stage)
    }

    pub fn address_of(&self, stage: Stage) -> Option<&Address> {
        self.get(stage).map(|m| &m.address)
    }

    pub fn modules(&self) -> &[DeployedModule] {
        &self.modules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DeployedModule> {
        self.modules.iter()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// True once every stage has been deployed
    pub fn is_complete(&self) -> bool {
        self.modules.len() == Stage::ALL.len()
    }
}

impl<'a> IntoIterator for &'a DeploymentReport {
    type Item = &'a DeployedModule;
    type IntoIter = std::slice::Iter<'a, DeployedModule>;

    fn into_iter(self) -> Self::IntoIter {
        self.modules.iter()
    }
}
