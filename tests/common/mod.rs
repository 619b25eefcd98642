//! Common test utilities for ec2-meta-env integration tests
//!
//! This module provides shared test infrastructure including:
//! - A mock metadata service using wiremock
//! - CLI invocation with a fully controlled environment
//! - Test fixture management

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Where the mock metadata service serves keys
pub const META_DATA_PATH: &str = "/latest/meta-data/";

/// Result of running the CLI
#[derive(Debug)]
pub struct CliResponse {
    pub stdout: String,
    pub stderr: String,
    /// Raw exit code (-1 if killed by a signal)
    pub exit_code: i32,
}

/// A metadata service on localhost, backed by wiremock
pub struct MetadataServer {
    // Declared first so the server is dropped before its runtime
    server: MockServer,
    runtime: Runtime,
}

impl MetadataServer {
    pub fn start() -> Self {
        let runtime = Runtime::new().expect("Failed to create tokio runtime");
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    /// Serve `value` for `key` with HTTP 200
    pub fn serve(&self, key: &str, value: &str) -> &Self {
        self.respond(key, ResponseTemplate::new(200).set_body_string(value))
    }

    /// Serve `key` with an arbitrary response
    pub fn respond(&self, key: &str, response: ResponseTemplate) -> &Self {
        self.runtime.block_on(
            Mock::given(method("GET"))
                .and(path(format!("{}{}", META_DATA_PATH, key)))
                .respond_with(response)
                .mount(&self.server),
        );
        self
    }

    /// Base URL to pass as --metadata-url
    pub fn url(&self) -> String {
        format!("{}{}", self.server.uri(), META_DATA_PATH)
    }

    /// Paths of all requests received so far
    pub fn requested_paths(&self) -> Vec<String> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
            .into_iter()
            .map(|r| r.url.path().to_string())
            .collect()
    }
}

/// The complete environment the CLI runs with
pub struct MockEnvironment {
    /// Temporary config directory
    pub config_dir: TempDir,
    /// Environment variables besides PATH and the config dir
    pub env_vars: HashMap<String, String>,
}

impl Default for MockEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEnvironment {
    pub fn new() -> Self {
        let config_dir = TempDir::new().expect("Failed to create temp config dir");
        Self {
            config_dir,
            env_vars: HashMap::new(),
        }
    }

    /// Set an environment variable
    pub fn set_env(&mut self, key: &str, value: &str) -> &mut Self {
        self.env_vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Write config.toml into the config directory
    pub fn write_config(&mut self, content: &str) -> &mut Self {
        std::fs::write(self.config_dir.path().join("config.toml"), content)
            .expect("Failed to write config file");
        self
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.path().to_path_buf()
    }
}

/// Run the CLI with the given arguments in an otherwise empty environment
pub fn ec2_meta_env(args: &[&str]) -> CliResponse {
    ec2_meta_env_with_env(args, &MockEnvironment::new())
}

/// Run the CLI with the given arguments and environment.
///
/// The process sees only PATH, the config dir and `env.env_vars`.
pub fn ec2_meta_env_with_env(args: &[&str], env: &MockEnvironment) -> CliResponse {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ec2-meta-env"));
    cmd.args(args);

    cmd.env_clear();
    cmd.env("PATH", std::env::var("PATH").unwrap_or_else(|_| "/usr/bin:/bin".to_string()));
    cmd.env("EC2_META_ENV_CONFIG_DIR", env.config_path());
    for (key, value) in &env.env_vars {
        cmd.env(key, value);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let output = cmd.output().expect("Failed to run ec2-meta-env");
    parse_output(output)
}

fn parse_output(output: Output) -> CliResponse {
    CliResponse {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(-1),
    }
}

/// Parse `env` output (NAME=value per line) into a map
pub fn parse_env_output(stdout: &str) -> HashMap<String, String> {
    stdout
        .lines()
        .filter_map(|line| line.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
