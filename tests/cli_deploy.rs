//! Integration tests for `authdeploy deploy`

mod common;

use common::*;

#[test]
fn deploy_without_configuration_fails_before_any_rpc() {
    let env = TestEnv::new();
    write_artifacts(&env);

    // Nothing listens here; a configuration failure must not need the node.
    let result = env.run(&["deploy", "--rpc-url", "http://127.0.0.1:9"]);

    assert!(!result.success, "deploy should fail:\n{}", result.stdout);
    assert!(
        result
            .stderr
            .contains("missing required configuration: OWNER, CERTIFICATE, SIGNING_DOMAIN, SIGNATURE_VERSION"),
        "stderr should list every missing key:\n{}",
        result.stderr
    );
    assert!(!result.stdout.contains("deployed at"));
}

#[test]
fn deploy_reports_partially_missing_configuration() {
    let env = TestEnv::new()
        .with_var("OWNER", OWNER)
        .with_var("CERTIFICATE", "CERT-1");

    let result = env.run(&["deploy", "--rpc-url", "http://127.0.0.1:9"]);

    assert!(!result.success);
    assert!(
        result
            .stderr
            .contains("missing required configuration: SIGNING_DOMAIN, SIGNATURE_VERSION"),
        "{}",
        result.stderr
    );
}

#[test]
fn deploy_rejects_malformed_owner() {
    let env = TestEnv::new()
        .with_config()
        .with_var("OWNER", "0xOWNER");

    let result = env.run(&["deploy", "--rpc-url", "http://127.0.0.1:9"]);

    assert!(!result.success);
    assert!(result.stderr.contains("invalid value for OWNER"), "{}", result.stderr);
}

#[test]
fn deploy_prints_one_line_per_module_in_stage_order() {
    let mut server = mockito::Server::new();
    let mocks = mock_node(&mut server);
    let env = TestEnv::new().with_config();
    write_artifacts(&env);
    write_networks(&env, &server);

    let result = env.run(&["deploy", "--network", "local"]);

    assert!(result.success, "deploy failed:\n{}", result.stderr);
    let deployed: Vec<&str> = result
        .stdout_lines()
        .into_iter()
        .filter(|line| line.contains("deployed at:"))
        .collect();
    assert_eq!(deployed.len(), 3, "stdout:\n{}", result.stdout);
    assert!(deployed[0].contains(&format!("OwnershipLib deployed at: {LIB_ADDRESS}")));
    assert!(deployed[1].contains(&format!("Ownership deployed at: {OWNERSHIP_ADDRESS}")));
    assert!(deployed[2].contains(&format!("Authenticity deployed at: {AUTHENTICITY_ADDRESS}")));
    assert!(result
        .stdout
        .contains(&format!("https://explorer.test/address/{AUTHENTICITY_ADDRESS}#code")));

    for send in &mocks.sends {
        send.assert();
    }
}

#[test]
fn deploy_reads_configuration_from_env_file() {
    let mut server = mockito::Server::new();
    let _mocks = mock_node(&mut server);
    let env = TestEnv::new();
    write_artifacts(&env);
    write_networks(&env, &server);
    env.write_project_file(
        "deploy.env",
        &format!(
            "OWNER={OWNER}\nCERTIFICATE=CERT-1\nSIGNING_DOMAIN=MyApp\nSIGNATURE_VERSION=1\n"
        ),
    );

    let result = env.run(&["deploy", "-n", "local", "--env-file", "deploy.env"]);

    assert!(result.success, "deploy failed:\n{}", result.stderr);
    assert_eq!(
        result
            .stdout
            .matches("deployed at:")
            .count(),
        3
    );
}

#[test]
fn deploy_failure_reports_partial_progress_and_exits_nonzero() {
    let mut server = mockito::Server::new();
    let mocks = mock_node_reverting(&mut server, Some("Ownership"));
    let env = TestEnv::new().with_config();
    write_artifacts(&env);
    write_networks(&env, &server);

    let result = env.run(&["deploy", "--network", "local"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("ownership deployment failed"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(result.stderr.contains("Deployed before the failure (1 of 3):"));
    assert!(result
        .stderr
        .contains(&format!("OwnershipLib deployed at: {LIB_ADDRESS}")));
    assert!(!result.stdout.contains("Authenticity deployed at"));

    mocks.sends[0].assert();
    mocks.sends[1].assert();
    assert!(!mocks.sends[2].matched(), "authenticity must not be sent");
}

#[test]
fn deploy_writes_record_on_success() {
    let mut server = mockito::Server::new();
    let _mocks = mock_node(&mut server);
    let env = TestEnv::new().with_config();
    write_artifacts(&env);
    write_networks(&env, &server);

    let result = env.run(&[
        "deploy",
        "--network",
        "local",
        "--record",
        "deployments/local.json",
    ]);
    assert!(result.success, "deploy failed:\n{}", result.stderr);

    let content = std::fs::read_to_string(env.project_path("deployments/local.json")).unwrap();
    let record: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(record["network"], "local");
    assert_eq!(record["chain_id"], 31337);
    assert_eq!(record["status"], "complete");

    let modules = record["modules"].as_array().unwrap();
    assert_eq!(modules.len(), 3);
    assert_eq!(modules[0]["stage"], "library");
    assert_eq!(modules[0]["address"], LIB_ADDRESS);
    assert_eq!(modules[1]["constructor_args"], serde_json::json!([OWNER]));
    assert_eq!(
        modules[2]["constructor_args"],
        serde_json::json!([OWNERSHIP_ADDRESS, "CERT-1", "MyApp", "1"])
    );
}

#[test]
fn deploy_writes_record_on_failure() {
    let mut server = mockito::Server::new();
    let _mocks = mock_node_reverting(&mut server, Some("Authenticity"));
    let env = TestEnv::new().with_config();
    write_artifacts(&env);
    write_networks(&env, &server);

    let result = env.run(&["deploy", "-n", "local", "--record", "record.json"]);
    assert!(!result.success);

    let content = std::fs::read_to_string(env.project_path("record.json")).unwrap();
    let record: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(record["status"], "failed");
    assert_eq!(record["failed_stage"], "authenticity");
    assert_eq!(record["modules"].as_array().unwrap().len(), 2);
}

#[test]
fn deploy_unknown_network_suggests_close_match() {
    let server = mockito::Server::new();
    let env = TestEnv::new().with_config();
    write_networks(&env, &server);

    let result = env.run(&["deploy", "--network", "locl"]);

    assert!(!result.success);
    assert!(result.stderr.contains("unknown network 'locl'"), "{}", result.stderr);
    assert!(result.stderr.contains("Did you mean 'local'?"), "{}", result.stderr);
}
