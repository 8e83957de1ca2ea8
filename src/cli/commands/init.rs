use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// Creates the config directory and file (skipped in test mode) and the
/// SQLite database with all migrations applied.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Database    : {db_path}"));

    let pool = DbPool::new(&db_path)?;
    if let Err(e) = ttlog(&pool.conn, "init", "database", &format!("Database initialized at {db_path}")) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success("rPresence initialization completed");
    Ok(())
}
