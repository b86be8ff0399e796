//! fxsheet library root.
//! Exposes the CLI parser, the high-level run() function, and the exchange
//! layer modules (export, api, core).

pub mod api;
pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod errors;
pub mod export;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use context::AppContext;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &AppContext) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, ctx),
        Commands::Upload { .. } => cli::commands::upload::handle(&cli.command, ctx),
        Commands::Requests { .. } => cli::commands::requests::handle(&cli.command, ctx),
        Commands::Template { .. } => cli::commands::template::handle(&cli.command),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init()
        .ok();

    let cli = Cli::parse();

    // `init` must work even when an existing config file is broken
    let cfg = match &cli.command {
        Commands::Init => Config::default(),
        _ => Config::load()?,
    };

    let ctx = AppContext::resolve(&cli, cfg);
    dispatch(&cli, &ctx)
}
