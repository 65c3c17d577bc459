//! Subcommand implementations

pub mod defaults;
pub mod describe;
pub mod list;

use cfgdefaults::{Config, TypeRegistry};

/// State shared by every subcommand
pub struct CommandContext {
    pub config: Config,
    pub registry: TypeRegistry,
    pub json: bool,
}
