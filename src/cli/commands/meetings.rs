use crate::cli::commands::{Ctx, find_cohort, load_events};
use crate::cli::parser::Commands;
use crate::core::attendance::DisplayState;
use crate::core::report::{Core, ParticipantReport};
use crate::db::pool::DbPool;
use crate::db::service::SqliteAttendanceService;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{status_badge, style_for_state};
use crate::utils::date::format_instant;
use crate::utils::table::{Cell, Column, Table};

pub fn handle(cmd: &Commands, ctx: &Ctx) -> AppResult<()> {
    if let Commands::Meetings {
        file,
        cohort,
        participant,
        json,
    } = cmd
    {
        let events = load_events(file)?;
        let (_, cohort) = find_cohort(&events, cohort)?;

        let pool = DbPool::new(&ctx.cfg.database)?;
        let index = SqliteAttendanceService::new(&pool.conn).index_for(&cohort.id)?;

        let report = Core::participant_report(cohort, participant, &index, &ctx.policy, &ctx.now);

        if *json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&report, ctx);
        }
    }
    Ok(())
}

fn print_report(report: &ParticipantReport, ctx: &Ctx) {
    let locale = ctx.cfg.locale;
    header(format!(
        "{} (#{}) · participant {}",
        report.cohort.name, report.cohort.id, report.participant_id
    ));
    println!("Status: {}", status_badge(report.cohort.status, ctx.color));

    if report.rows.is_empty() {
        println!("No meetings scheduled.");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Start", 5),
        Column::new("End", 5),
        Column::new("State", 10),
        Column::new("Opens", 16),
        Column::new("Closes", 16),
    ]);

    for row in &report.rows {
        let (opens, closes) = match &row.window {
            Some(w) => (format_instant(&w.opens_at, locale), format_instant(&w.closes_at, locale)),
            None => ("--".to_string(), "--".to_string()),
        };
        table.add_row(vec![
            Cell::plain(row.meeting.date_label(locale)),
            Cell::plain(row.meeting.start_str()),
            Cell::plain(row.meeting.end_str()),
            Cell::styled(row.state.label(), style_for_state(row.state)),
            Cell::plain(opens),
            Cell::plain(closes),
        ]);
    }
    print!("{}", table.render(ctx.color));

    let totals: Vec<String> = DisplayState::ALL
        .iter()
        .map(|s| format!("{}: {}", s.label(), report.count(*s)))
        .collect();
    println!("{}", totals.join(" | "));
}
