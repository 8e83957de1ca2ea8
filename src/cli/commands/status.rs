use crate::cli::commands::{Ctx, load_events};
use crate::cli::parser::Commands;
use crate::core::report::{Core, EventSummary};
use crate::errors::AppResult;
use crate::models::window::Window;
use crate::utils::colors::status_badge;
use crate::utils::date::{Locale, format_instant};

pub fn handle(cmd: &Commands, ctx: &Ctx) -> AppResult<()> {
    if let Commands::Status { file, json } = cmd {
        let events = load_events(file)?;
        let summaries: Vec<EventSummary> = events
            .iter()
            .map(|ev| Core::summarize_event(ev, &ctx.now))
            .collect();

        if *json {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
            return Ok(());
        }

        if summaries.is_empty() {
            println!("No events in {}", file.display());
            return Ok(());
        }

        for s in &summaries {
            print_event(s, ctx);
        }
    }
    Ok(())
}

fn describe_window(w: Option<&Window>, locale: Locale) -> String {
    let bound = |b: Option<_>| match b {
        Some(at) => format_instant(&at, locale),
        None => "?".to_string(),
    };
    match w {
        Some(w) => format!("{} → {}", bound(w.start), bound(w.end)),
        None => "no dates".to_string(),
    }
}

fn print_event(s: &EventSummary, ctx: &Ctx) {
    let locale = ctx.cfg.locale;
    println!(
        "\n{} (#{}) {}",
        s.title,
        s.id,
        status_badge(s.status, ctx.color)
    );
    println!("  {}", describe_window(s.window.as_ref(), locale));

    for c in &s.cohorts {
        println!(
            "  - {} (#{}) {} {} | {} meetings",
            c.name,
            c.id,
            status_badge(c.status, ctx.color),
            describe_window(Some(&c.window), locale),
            c.meeting_count
        );
    }
}
