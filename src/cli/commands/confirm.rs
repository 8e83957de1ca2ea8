use crate::cli::commands::{Ctx, find_cohort, load_events};
use crate::cli::parser::Commands;
use crate::core::confirmation::{ConfirmationOutcome, confirm_meeting};
use crate::db::pool::DbPool;
use crate::db::service::SqliteAttendanceService;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::{format_date, parse_date_only};

pub fn handle(cmd: &Commands, ctx: &Ctx) -> AppResult<()> {
    if let Commands::Confirm {
        file,
        cohort,
        participant,
        date,
    } = cmd
    {
        let date = parse_date_only(date)?;
        let events = load_events(file)?;
        let (_, cohort) = find_cohort(&events, cohort)?;

        let pool = DbPool::new(&ctx.cfg.database)?;
        let mut service = SqliteAttendanceService::new(&pool.conn);
        let index = service.index_for(&cohort.id)?;

        let outcome = confirm_meeting(
            &mut service,
            cohort,
            participant,
            date,
            &index,
            &ctx.policy,
            ctx.now,
        )?;

        let day = format_date(date, ctx.cfg.locale);
        match outcome {
            ConfirmationOutcome::Confirmed => success(format!(
                "Presence confirmed: participant {participant}, {} on {day}",
                cohort.name
            )),
            ConfirmationOutcome::AlreadyConfirmed => success(format!(
                "Presence already confirmed: participant {participant}, {} on {day}",
                cohort.name
            )),
        }
    }
    Ok(())
}
