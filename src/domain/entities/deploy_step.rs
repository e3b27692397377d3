//! Deploy step entity - the input to one backend call

use std::collections::BTreeMap;

use crate::domain::value_objects::{Address, ConstructorArg, Stage};
use crate::error::{DeployError, DeployResult};

/// Explicit mapping from a library stage to its deployed address.
///
/// Keys are stages rather than free-form strings so a link can only ever name
/// a module this pipeline knows how to deploy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkMap {
    links: BTreeMap<Stage, Address>,
}

impl LinkMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, library: Stage, address: Address) -> Self {
        self.insert(library, address);
        self
    }

    pub fn insert(&mut self, library: Stage, address: Address) -> Option<Address> {
        self.links.insert(library, address)
    }

    pub fn get(&self, library: Stage) -> Option<&Address> {
        self.links.get(&library)
    }

    /// Look up a link by the library's symbolic name (e.g. `"library"`)
    pub fn get_by_name(&self, name: &str) -> Option<&Address> {
        Stage::from_name(name).and_then(|stage| self.get(stage))
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stage, &Address)> {
        self.links.iter().map(|(stage, addr)| (*stage, addr))
    }

    /// Check the map holds exactly the libraries `stage` links against.
    pub fn validate_for(&self, stage: Stage) -> DeployResult<()> {
        let expected = stage.linked_libraries();

        if let Some(library) = self.links.keys().find(|lib| !expected.contains(lib)) {
            return Err(DeployError::UnexpectedLink {
                stage,
                library: *library,
            });
        }

        if let Some(missing) = expected.iter().find(|lib| !self.links.contains_key(lib)) {
            return Err(DeployError::DependencyUnavailable {
                stage,
                dependency: *missing,
            });
        }

        Ok(())
    }
}

/// Everything the backend needs to deploy one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployStep {
    stage: Stage,
    link_map: LinkMap,
    constructor_args: Vec<ConstructorArg>,
}

impl DeployStep {
    pub fn new(stage: Stage) -> Self {
        Self {
            stage,
            link_map: LinkMap::new(),
            constructor_args: Vec::new(),
        }
    }

    pub fn with_link_map(mut self, link_map: LinkMap) -> Self {
        self.link_map = link_map;
        self
    }

    pub fn with_arg(mut self, arg: ConstructorArg) -> Self {
        self.constructor_args.push(arg);
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Compiled module name the backend deploys
    pub fn module_name(&self) -> &'static str {
        self.stage.module()
    }

    pub fn link_map(&self) -> &LinkMap {
        &self.link_map
    }

    pub fn constructor_args(&self) -> &[ConstructorArg] {
        &self.constructor_args
    }
}
