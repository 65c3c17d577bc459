//! cfgdefaults CLI - print configuration defaults with their constraints
//!
//! Usage: cfgdefaults <COMMAND>
//!
//! Commands:
//!   defaults  Print configuration default values as YAML
//!   list      List registered configuration types
//!   describe  Show the field table of a configuration type

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use cfgdefaults::config::LogLevel;
use cfgdefaults::{catalog, logging, Config};
use cli::{Cli, Commands};
use commands::CommandContext;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let log = logging::init(logging::effective_level(cli.verbose, LogLevel::default()))
        .map_err(|e| anyhow::anyhow!(e))?;

    let cwd = std::env::current_dir()?;
    let (config, warnings) = Config::discover(cli.config.as_deref(), &cwd)?;
    log.set_level(logging::effective_level(cli.verbose, config.output.log_level))?;

    if cli.json {
        ui::output::emit_config_warnings(&warnings)?;
    } else {
        ui::output::print_config_warnings(&warnings);
    }

    let ctx = CommandContext {
        config,
        registry: catalog::builtin(),
        json: cli.json,
    };

    match cli.command {
        Commands::Defaults {
            config_type,
            layout,
        } => commands::defaults::cmd_defaults(&ctx, config_type.as_deref(), layout.map(Into::into)),
        Commands::List => commands::list::cmd_list(&ctx),
        Commands::Describe { config_type } => commands::describe::cmd_describe(&ctx, &config_type),
    }
}
