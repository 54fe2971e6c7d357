#![allow(dead_code)]

pub mod catalog_server;

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper struct to run sightsee commands in an isolated temp directory
pub struct SightseeTest {
    pub temp_dir: TempDir,
    binary_path: String,
    backend_url: Option<String>,
}

impl SightseeTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        SightseeTest {
            temp_dir,
            binary_path: env!("CARGO_BIN_EXE_sightsee").to_string(),
            backend_url: None,
        }
    }

    /// Point every run at this catalog through the environment
    pub fn with_backend(mut self, url: impl Into<String>) -> Self {
        self.backend_url = Some(url.into());
        self
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_stdin(args, "")
    }

    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Output {
        use std::io::Write;
        use std::process::Stdio;

        let mut command = Command::new(&self.binary_path);
        command
            .args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("SIGHTSEE_ROOT")
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        match &self.backend_url {
            Some(url) => command.env("SIGHTSEE_BACKEND_URL", url),
            None => command.env_remove("SIGHTSEE_BACKEND_URL"),
        };

        let mut child = command.spawn().expect("Failed to execute sightsee command");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(stdin.as_bytes())
            .expect("Failed to write stdin");
        child
            .wait_with_output()
            .expect("Failed to wait for sightsee command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert_success(args, &output);
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn read_config(&self) -> String {
        let path = self.temp_dir.path().join(".sightsee").join("config.yaml");
        fs::read_to_string(path).expect("Failed to read config file")
    }

    pub fn write_config(&self, content: &str) {
        let dir = self.temp_dir.path().join(".sightsee");
        fs::create_dir_all(&dir).expect("Failed to create .sightsee directory");
        fs::write(dir.join("config.yaml"), content).expect("Failed to write config file");
    }
}

pub fn assert_success(args: &[&str], output: &Output) {
    if !output.status.success() {
        panic!(
            "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
            args,
            output.status,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}
