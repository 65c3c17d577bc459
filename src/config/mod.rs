//! Configuration module for cfgdefaults
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CFGDEFAULTS_*)
//! 3. Explicit `--config` file, else project config (./cfgdefaults.toml)
//! 4. User config (<config_dir>/cfgdefaults/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{Config, LogLevel, OutputConfig, TraversalConfig, PROJECT_CONFIG_FILE};
