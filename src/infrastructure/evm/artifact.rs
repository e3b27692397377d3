//! Hardhat compilation artifacts
//!
//! Artifacts are looked up at `<root>/contracts/<Name>.sol/<Name>.json` first,
//! then anywhere under `<root>` by file name (debug files and build-info are
//! skipped). Only the creation bytecode and its link references are used.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use serde::Deserialize;
use tracing::debug;

use super::error::EvmError;

/// Byte range inside the creation bytecode that holds a library address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LinkReference {
    pub start: usize,
    pub length: usize,
}

/// source file -> library name -> placeholder positions
pub type LinkReferences = BTreeMap<String, BTreeMap<String, Vec<LinkReference>>>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub contract_name: String,
    #[serde(default)]
    pub source_name: String,
    /// Hex creation bytecode, `0x`-prefixed, with `__$…$__` placeholders
    pub bytecode: String,
    #[serde(default)]
    pub link_references: LinkReferences,
}

impl Artifact {
    pub fn parse(content: &str, path: &Path) -> Result<Self, EvmError> {
        let artifact: Artifact =
            serde_json::from_str(content).map_err(|e| EvmError::ArtifactInvalid {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if artifact.bytecode.trim_start_matches("0x").is_empty() {
            return Err(EvmError::ArtifactInvalid {
                path: path.to_path_buf(),
                message: format!("{} has no creation bytecode", artifact.contract_name),
            });
        }
        Ok(artifact)
    }

    /// Names of every library this contract must be linked against
    pub fn library_names(&self) -> impl Iterator<Item = &str> {
        self.link_references
            .values()
            .flat_map(|libraries| libraries.keys().map(String::as_str))
    }

    /// Placeholder positions for `library`, whichever source file declares it
    pub fn references_to(&self, library: &str) -> Vec<LinkReference> {
        self.link_references
            .values()
            .filter_map(|libraries| libraries.get(library))
            .flatten()
            .copied()
            .collect()
    }
}

/// Artifact directory of a compiled project
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn load(&self, contract: &str) -> Result<Artifact, EvmError> {
        let path = self.locate(contract)?;
        debug!(contract, path = %path.display(), "loading artifact");

        let content = fs::read_to_string(&path).map_err(|source| EvmError::ArtifactRead {
            path: path.clone(),
            source,
        })?;
        Artifact::parse(&content, &path)
    }

    fn locate(&self, contract: &str) -> Result<PathBuf, EvmError> {
        let file_name = format!("{}.json", contract);

        let conventional = self
            .root
            .join("contracts")
            .join(format!("{}.sol", contract))
            .join(&file_name);
        if conventional.is_file() {
            return Ok(conventional);
        }

        // Artifact directories are usually git-ignored, so standard filters stay off.
        WalkBuilder::new(&self.root)
            .standard_filters(false)
            .build()
            .filter_map(Result::ok)
            .map(|entry| entry.into_path())
            .filter(|path| !path.components().any(|c| c.as_os_str() == "build-info"))
            .find(|path| {
                path.is_file() && path.file_name().is_some_and(|name| name == file_name.as_str())
            })
            .ok_or_else(|| EvmError::ArtifactNotFound {
                contract: contract.to_string(),
                root: self.root.clone(),
            })
    }
}
