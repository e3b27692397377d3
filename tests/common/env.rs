//! Test environment for running the authdeploy binary in isolation.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running an authdeploy CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Non-empty stdout lines
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().filter(|l| !l.trim().is_empty()).collect()
    }

    /// Parse stdout as NDJSON
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout_lines()
            .into_iter()
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("not JSON: {line} ({e})\n{}", self.stdout))
            })
            .collect()
    }
}

/// Isolated project and home directories, with a scrubbed environment.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    vars: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().unwrap(),
            home_dir: TempDir::new().unwrap(),
            vars: Vec::new(),
        }
    }

    /// Set an environment variable for every command run in this env
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.push((key.to_string(), value.to_string()));
        self
    }

    /// The scenario configuration with a well-formed owner address
    pub fn with_config(self) -> Self {
        self.with_var("OWNER", crate::common::OWNER)
            .with_var("CERTIFICATE", "CERT-1")
            .with_var("SIGNING_DOMAIN", "MyApp")
            .with_var("SIGNATURE_VERSION", "1")
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_authdeploy"));
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1");
        for key in [
            "OWNER",
            "CERTIFICATE",
            "SIGNING_DOMAIN",
            "SIGNATURE_VERSION",
            "AUTHDEPLOY_NETWORK",
            "AUTHDEPLOY_RPC_URL",
            "AUTHDEPLOY_FROM",
            "AUTHDEPLOY_LOG",
        ] {
            cmd.env_remove(key);
        }
        for (key, value) in &self.vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute authdeploy");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
