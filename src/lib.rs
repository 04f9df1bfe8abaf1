//! tt library root.
//! Exposes the CLI parser, high-level run() functions, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod report;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands, GlobalArgs, ReportCli};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Track { .. } => cli::commands::track::handle(&cli.command, cfg),
        Commands::Report(_) => cli::commands::report::handle(&cli.command, cfg),
        Commands::Open { .. } => cli::commands::open::handle(&cli.command, cfg),
        Commands::Config { .. } => {
            cli::commands::config::handle(&cli.command, cfg, &config_path(&cli.global))
        }
    }
}

fn config_path(global: &GlobalArgs) -> PathBuf {
    global
        .config_file
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file)
}

/// Load the config file once, then apply command-line overrides on top.
pub fn effective_config(global: &GlobalArgs) -> AppResult<Config> {
    let mut cfg = Config::load_from(&config_path(global))?;

    if let Some(data) = &global.data {
        cfg.data_file = data.clone();
    }
    if let Some(delimiter) = &global.delimiter {
        cfg.delimiter = delimiter.clone();
    }

    // fail early on a bad delimiter, before any file is touched
    cfg.delimiter_byte()?;

    Ok(cfg)
}

/// Entry point used by the `tt` binary
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg = effective_config(&cli.global)?;
    dispatch(&cli, &cfg)
}

/// Entry point used by the standalone `tt-report` binary
pub fn run_report() -> AppResult<()> {
    let cli = ReportCli::parse();
    let cfg = effective_config(&cli.global)?;
    cli::commands::report::handle_args(&cli.report, &cfg)
}
