//! Test fixtures - artifacts, addresses and JSON-RPC mocks.

use mockito::{Matcher, Mock, Server};
use serde_json::{json, Value};

use super::TestEnv;

pub const OWNER: &str = "0x70997970c51812dc3a010c7d01b50e0d17dc79c8";
pub const SENDER: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";
pub const LIB_ADDRESS: &str = "0x5fbdb2315678afecb367f032d93f642f64180aa3";
pub const OWNERSHIP_ADDRESS: &str = "0xe7f1725e7734ce288f8367e1bb143e90bb3f0512";
pub const AUTHENTICITY_ADDRESS: &str = "0x9fe46736679d2d9a65f0992f2272de9f3c7fa6e0";

const PLACEHOLDER: &str = "__$0123456789abcdef0123456789abcdef01$__";

/// Write minimal artifacts for the three modules under `artifacts/`
pub fn write_artifacts(env: &TestEnv) {
    write_artifact(env, "OwnershipLib", "0x6001".to_string(), json!({}));
    write_artifact(
        env,
        "Ownership",
        format!("0x6002{}", PLACEHOLDER),
        json!({"contracts/OwnershipLib.sol": {"OwnershipLib": [{"start": 2, "length": 20}]}}),
    );
    write_artifact(env, "Authenticity", "0x6003".to_string(), json!({}));
}

fn write_artifact(env: &TestEnv, name: &str, bytecode: String, link_refs: Value) {
    let artifact = json!({
        "_format": "hh-sol-artifact-1",
        "contractName": name,
        "sourceName": format!("contracts/{}.sol", name),
        "abi": [],
        "bytecode": bytecode,
        "deployedBytecode": "0x",
        "linkReferences": link_refs,
        "deployedLinkReferences": {}
    });
    env.write_project_file(
        &format!("artifacts/contracts/{name}.sol/{name}.json"),
        &artifact.to_string(),
    );
}

fn rpc(server: &mut Server, body: Value, result: Value) -> Mock {
    server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(body))
        .with_header("content-type", "application/json")
        .with_body(json!({"jsonrpc": "2.0", "id": 1, "result": result}).to_string())
        .create()
}

/// Mocks held for the lifetime of a test; dropping a mock removes it.
#[derive(Default)]
pub struct NodeMocks {
    /// `eth_sendTransaction` per module, in stage order
    pub sends: Vec<Mock>,
    pub other: Vec<Mock>,
}

/// A local node that deploys the three modules at fixed addresses.
///
/// Each creation transaction is told apart by its bytecode prefix.
pub fn mock_node(server: &mut Server) -> NodeMocks {
    mock_node_reverting(server, None)
}

/// Like `mock_node`, but the creation transaction of `reverted_module`
/// (if any) gets a failed receipt.
pub fn mock_node_reverting(server: &mut Server, reverted_module: Option<&str>) -> NodeMocks {
    let mut mocks = NodeMocks::default();
    mocks.other = vec![
        rpc(server, json!({"method": "eth_chainId"}), json!("0x7a69")),
        rpc(server, json!({"method": "eth_accounts"}), json!([SENDER])),
    ];

    for (module, prefix, tx_hash_tail, address) in [
        ("OwnershipLib", "0x6001", "1", LIB_ADDRESS),
        ("Ownership", "0x6002", "2", OWNERSHIP_ADDRESS),
        ("Authenticity", "0x6003", "3", AUTHENTICITY_ADDRESS),
    ] {
        let tx_hash = tx_hash(tx_hash_tail);
        let status = if reverted_module == Some(module) {
            "0x0"
        } else {
            "0x1"
        };
        mocks.sends.push(
            server
                .mock("POST", "/")
                .match_body(Matcher::AllOf(vec![
                    Matcher::PartialJson(json!({"method": "eth_sendTransaction"})),
                    Matcher::Regex(format!(r#""data":"{}"#, prefix)),
                ]))
                .with_header("content-type", "application/json")
                .with_body(json!({"jsonrpc": "2.0", "id": 1, "result": tx_hash}).to_string())
                .expect(1)
                .create(),
        );
        mocks.other.push(rpc(
            server,
            json!({"method": "eth_getTransactionReceipt", "params": [tx_hash]}),
            receipt(&tx_hash, status, address),
        ));
    }
    mocks
}

/// A 32-byte transaction hash ending in `tail`
pub fn tx_hash(tail: &str) -> String {
    format!("0x{:0>64}", tail)
}

/// A mined creation receipt with every field a node returns
pub fn receipt(tx_hash: &str, status: &str, contract: &str) -> Value {
    json!({
        "transactionHash": tx_hash,
        "transactionIndex": "0x0",
        "blockHash": format!("0x{}", "11".repeat(32)),
        "blockNumber": "0x1",
        "from": SENDER,
        "to": null,
        "cumulativeGasUsed": "0x5208",
        "gasUsed": "0x5208",
        "contractAddress": contract,
        "logs": [],
        "logsBloom": format!("0x{}", "0".repeat(512)),
        "status": status,
        "type": "0x2",
        "effectiveGasPrice": "0x1"
    })
}

/// Networks file pointing `local` at the mock node
pub fn write_networks(env: &TestEnv, server: &Server) {
    env.write_project_file(
        "authdeploy.toml",
        &format!(
            r#"[networks.local]
rpc_url = "{}"
chain_id = 31337
explorer_url = "https://explorer.test"
poll_interval_ms = 10
receipt_timeout_secs = 5
"#,
            server.url()
        ),
    );
}
