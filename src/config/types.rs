//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DefaultsResult;
use crate::introspect::{Layout, PrintOptions, DEFAULT_MAX_DEPTH};

use super::loader::{self, ConfigWarning};

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "cfgdefaults.toml";

/// Type printed by `defaults` when none is given
pub const DEFAULT_TYPE: &str = "example.HelloWorldConfiguration";

/// Log level for the stderr subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    #[serde(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub layout: Layout,

    #[serde(default)]
    pub log_level: LogLevel,
}

/// Traversal configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TraversalConfig {
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_type() -> String {
    DEFAULT_TYPE.to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_type")]
    pub default_type: String,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub traversal: TraversalConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_type: default_type(),
            output: OutputConfig::default(),
            traversal: TraversalConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DefaultsResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DefaultsResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Locate and load configuration, then apply env overrides.
    pub fn discover(
        explicit: Option<&Path>,
        project_root: &Path,
    ) -> DefaultsResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit, project_root)
    }

    /// Apply environment variable overrides (CFGDEFAULTS_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    pub fn print_options(&self) -> PrintOptions {
        PrintOptions {
            layout: self.output.layout,
            max_depth: self.traversal.max_depth,
        }
    }
}
