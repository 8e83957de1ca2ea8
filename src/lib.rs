//! rPresence library root.
//!
//! Temporal status and attendance-confirmation engine for educational events,
//! class cohorts ("turmas") and their meetings, plus a small CLI over it.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands::{self, Ctx};
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use models::policy::ConfirmationPolicy;
use utils::clock::{Clock, FixedClock, SystemClock};
use utils::date::parse_instant;

/// Resolve "now": `--at` pins the clock, otherwise the system clock is read once.
fn clock_for(cli: &Cli) -> AppResult<Box<dyn Clock>> {
    Ok(match &cli.at {
        Some(at) => Box::new(FixedClock(parse_instant(at)?)),
        None => Box::new(SystemClock),
    })
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Init = cli.command {
        return commands::init::handle(cli);
    }

    let policy = match &cli.policy {
        Some(name) => ConfirmationPolicy::preset(name)?,
        None => cfg.policy.resolve()?,
    };

    let ctx = Ctx {
        cfg,
        now: clock_for(cli)?.now(),
        policy,
        color: !cli.no_color,
    };

    match &cli.command {
        Commands::Init => Ok(()),
        Commands::Config { .. } => commands::config::handle(&cli.command, &ctx),
        Commands::Status { .. } => commands::status::handle(&cli.command, &ctx),
        Commands::Meetings { .. } => commands::meetings::handle(&cli.command, &ctx),
        Commands::Confirm { .. } => commands::confirm::handle(&cli.command, &ctx),
        Commands::Log { .. } => commands::log::handle(&cli.command, &ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    ui::messages::set_color(!cli.no_color);

    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    cfg.database = cfg.database_path().to_string_lossy().to_string();

    let _logger = logging::init(cli.verbose, &cfg.log_level)?;

    dispatch(&cli, &cfg)
}
