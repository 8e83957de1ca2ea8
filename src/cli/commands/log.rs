use crate::cli::commands::Ctx;
use crate::cli::parser::Commands;
use crate::db::log::recent;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::{Cell, Column, Table};

pub fn handle(cmd: &Commands, ctx: &Ctx) -> AppResult<()> {
    if let Commands::Log { limit } = cmd {
        let pool = DbPool::new(&ctx.cfg.database)?;
        let rows = recent(&pool.conn, *limit)?;

        if rows.is_empty() {
            println!("No log entries.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("Date", 25),
            Column::new("Operation", 10),
            Column::new("Target", 10),
            Column::new("Message", 0),
        ]);
        for (date, op, target, msg) in rows {
            table.add_row(vec![
                Cell::plain(date),
                Cell::plain(op),
                Cell::plain(target),
                Cell::plain(msg),
            ]);
        }
        print!("{}", table.render(ctx.color));
    }
    Ok(())
}
