//! CLI Argument Parsing
//!
//! Global flags (--json, --config, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutArg {
    /// Comment lines only for constrained fields, no blank lines
    Compact,
    /// One comment line per scalar and a blank line after every value
    Legacy,
}

impl From<LayoutArg> for cfgdefaults::Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Compact => cfgdefaults::Layout::Compact,
            LayoutArg::Legacy => cfgdefaults::Layout::Legacy,
        }
    }
}

/// cfgdefaults - print configuration defaults with their constraints
#[derive(Parser, Debug)]
#[command(name = "cfgdefaults")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a config file (defaults to ./cfgdefaults.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print configuration default values as YAML
    Defaults {
        /// Fully qualified (or unique simple) name of the configuration type
        #[arg(value_name = "CONFIG_TYPE")]
        config_type: Option<String>,

        /// Report layout (overrides output.layout)
        #[arg(long, value_enum)]
        layout: Option<LayoutArg>,
    },

    /// List registered configuration types
    List,

    /// Show the field table of a configuration type
    Describe {
        /// Fully qualified (or unique simple) name of the configuration type
        #[arg(value_name = "CONFIG_TYPE")]
        config_type: String,
    },
}
