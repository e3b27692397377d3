//! Stage value object - one step of the deployment pipeline

use serde::{Deserialize, Serialize};

/// A deployment stage, one per module.
///
/// Declaration order is deployment order: a stage may only depend on
/// stages declared before it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Shared library linked into the ownership module
    Library,
    /// Ownership tracking module
    Ownership,
    /// Certificate/authenticity module
    Authenticity,
}

impl Stage {
    /// Every stage, in deployment order
    pub const ALL: [Stage; 3] = [Stage::Library, Stage::Ownership, Stage::Authenticity];

    /// Symbolic name used in reports and link maps
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Library => "library",
            Stage::Ownership => "ownership",
            Stage::Authenticity => "authenticity",
        }
    }

    /// Compiled module (contract) name
    pub fn module(&self) -> &'static str {
        match self {
            Stage::Library => "OwnershipLib",
            Stage::Ownership => "Ownership",
            Stage::Authenticity => "Authenticity",
        }
    }

    /// Libraries whose addresses must be linked into this stage's code
    pub fn linked_libraries(&self) -> &'static [Stage] {
        match self {
            Stage::Ownership => &[Stage::Library],
            Stage::Library | Stage::Authenticity => &[],
        }
    }

    /// Stages whose addresses this stage consumes, by link or by argument
    pub fn dependencies(&self) -> &'static [Stage] {
        match self {
            Stage::Library => &[],
            Stage::Ownership => &[Stage::Library],
            Stage::Authenticity => &[Stage::Ownership],
        }
    }

    /// Position in the pipeline (0-based)
    pub fn index(&self) -> usize {
        match self {
            Stage::Library => 0,
            Stage::Ownership => 1,
            Stage::Authenticity => 2,
        }
    }

    pub fn next(&self) -> Option<Stage> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn first() -> Stage {
        Stage::Library
    }

    /// Look a stage up by its symbolic name
    pub fn from_name(name: &str) -> Option<Stage> {
        Self::ALL.into_iter().find(|stage| stage.name() == name)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
