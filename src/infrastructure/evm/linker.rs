//! Library linking
//!
//! Solidity leaves a 40-character `__$<hash>$__` placeholder wherever a
//! library address belongs; the artifact's link references give the byte
//! offset of each one.

use std::collections::BTreeMap;

use ethers::types::Address as EvmAddress;

use super::artifact::{Artifact, LinkReference};
use super::error::LinkError;

const PLACEHOLDER_MARKER: &str = "__";

/// Splice library addresses into `artifact`'s creation bytecode.
///
/// Every library the artifact references must be supplied, and every
/// supplied library must be referenced.
pub fn link(
    artifact: &Artifact,
    libraries: &BTreeMap<String, EvmAddress>,
) -> Result<Vec<u8>, LinkError> {
    let contract = &artifact.contract_name;
    let mut code = artifact
        .bytecode
        .trim()
        .trim_start_matches("0x")
        .to_string();
    if !code.is_ascii() {
        return Err(LinkError::InvalidBytecode {
            contract: contract.clone(),
            message: "bytecode is not hex".to_string(),
        });
    }

    for library in libraries.keys() {
        if artifact.references_to(library).is_empty() {
            return Err(LinkError::UnusedLibrary {
                contract: contract.clone(),
                library: library.clone(),
            });
        }
    }

    for library in artifact.library_names() {
        let address = libraries.get(library).ok_or_else(|| LinkError::Unlinked {
            contract: contract.clone(),
            library: library.to_string(),
        })?;
        let address_hex = hex::encode(address.as_bytes());

        for reference in artifact.references_to(library) {
            let range = hex_range(&reference, code.len()).ok_or_else(|| LinkError::OutOfRange {
                library: library.to_string(),
                start: reference.start,
                length: reference.length,
            })?;
            code.replace_range(range, &address_hex);
        }
    }

    if code.contains(PLACEHOLDER_MARKER) {
        return Err(LinkError::Unresolved {
            contract: contract.clone(),
        });
    }

    hex::decode(&code).map_err(|e| LinkError::InvalidBytecode {
        contract: contract.clone(),
        message: e.to_string(),
    })
}

/// Hex-digit range of `reference` inside `code_len` hex digits, if it holds
/// exactly one address.
fn hex_range(reference: &LinkReference, code_len: usize) -> Option<std::ops::Range<usize>> {
    if reference.length != EvmAddress::len_bytes() {
        return None;
    }
    let start = reference.start.checked_mul(2)?;
    let end = reference
        .start
        .checked_add(reference.length)?
        .checked_mul(2)?;
    (end <= code_len).then_some(start..end)
}
