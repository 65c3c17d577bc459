//! Common test utilities for cfgdefaults CLI tests.
//!
//! `TestEnv` gives each test its own project directory and HOME so that no
//! real user configuration leaks into the run.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a cfgdefaults CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory used as the working directory
    pub project_root: TempDir,
    /// Temporary directory for HOME and XDG_CONFIG_HOME
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create project dir"),
            home_dir: tempfile::tempdir().expect("Failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_cfgdefaults")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Get path relative to the user config directory
    pub fn user_config_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(".config").join(relative)
    }

    /// Run cfgdefaults from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run cfgdefaults from the project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("RUST_LOG")
            .env_remove("CFGDEFAULTS_LAYOUT")
            .env_remove("CFGDEFAULTS_LOG_LEVEL")
            .env_remove("CFGDEFAULTS_MAX_DEPTH")
            .env_remove("CFGDEFAULTS_DEFAULT_TYPE");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute cfgdefaults");
        output_to_result(output)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }

    /// Write a file below the user config directory
    pub fn write_user_config(&self, relative_path: &str, content: &str) {
        write_file(&self.user_config_path(relative_path), content);
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
