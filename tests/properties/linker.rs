//! Library linking invariants

use std::collections::BTreeMap;

use authdeploy::infrastructure::evm::artifact::{Artifact, LinkReference};
use authdeploy::infrastructure::evm::linker::link;
use ethers::types::Address as EvmAddress;
use proptest::prelude::*;

const PLACEHOLDER: &str = "__$0123456789abcdef0123456789abcdef01$__";

/// Bytecode with a placeholder between consecutive chunks, plus the byte
/// offset of every placeholder.
fn bytecode_with_placeholders(chunks: &[Vec<u8>]) -> (String, Vec<LinkReference>) {
    let mut code = String::from("0x");
    let mut references = Vec::new();
    let mut offset = 0;

    for (index, chunk) in chunks.iter().enumerate() {
        code.push_str(&hex::encode(chunk));
        offset += chunk.len();
        if index + 1 < chunks.len() {
            references.push(LinkReference {
                start: offset,
                length: 20,
            });
            code.push_str(PLACEHOLDER);
            offset += 20;
        }
    }
    (code, references)
}

fn artifact(bytecode: String, references: Vec<LinkReference>) -> Artifact {
    let mut libraries = BTreeMap::new();
    libraries.insert("OwnershipLib".to_string(), references);
    let mut link_references = BTreeMap::new();
    link_references.insert("contracts/OwnershipLib.sol".to_string(), libraries);

    Artifact {
        contract_name: "Ownership".to_string(),
        source_name: "contracts/Ownership.sol".to_string(),
        bytecode,
        link_references,
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    /// The library address lands at every referenced offset and nothing
    /// else changes
    #[test]
    fn property_link_splices_address_at_every_reference(
        chunks in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..24), 2..5),
        address in any::<[u8; 20]>(),
    ) {
        let (bytecode, references) = bytecode_with_placeholders(&chunks);
        let artifact = artifact(bytecode, references.clone());
        let libraries = BTreeMap::from([("OwnershipLib".to_string(), EvmAddress::from(address))]);

        let code = link(&artifact, &libraries).unwrap();

        let expected_len = chunks.iter().map(Vec::len).sum::<usize>() + references.len() * 20;
        prop_assert_eq!(code.len(), expected_len);
        for reference in &references {
            prop_assert_eq!(&code[reference.start..reference.start + 20], &address[..]);
        }
        prop_assert_eq!(&code[..chunks[0].len()], &chunks[0][..]);
    }

    /// Linking without the library always fails
    #[test]
    fn property_link_without_library_fails(
        chunks in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..24), 2..4),
    ) {
        let (bytecode, references) = bytecode_with_placeholders(&chunks);
        let artifact = artifact(bytecode, references);

        let linked = link(&artifact, &BTreeMap::new());
        prop_assert!(linked.is_err());
    }
}
