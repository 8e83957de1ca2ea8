pub mod config;
pub mod confirm;
pub mod init;
pub mod log;
pub mod meetings;
pub mod status;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::cohort::Cohort;
use crate::models::event::Event;
use crate::models::policy::ConfirmationPolicy;
use crate::utils::date::Instant;
use std::path::Path;

/// Resolved per-invocation settings shared by the command handlers.
pub struct Ctx<'a> {
    pub cfg: &'a Config,
    pub now: Instant,
    pub policy: ConfirmationPolicy,
    pub color: bool,
}

pub(crate) fn load_events(file: &Path) -> AppResult<Vec<Event>> {
    Event::load_file(file).map_err(|e| match e {
        AppError::Io(io) => AppError::NotFound(format!("{}: {io}", file.display())),
        other => other,
    })
}

/// First cohort with the given id across all events.
pub(crate) fn find_cohort<'e>(events: &'e [Event], cohort_id: &str) -> AppResult<(&'e Event, &'e Cohort)> {
    events
        .iter()
        .find_map(|ev| ev.cohort(cohort_id).map(|c| (ev, c)))
        .ok_or_else(|| AppError::NotFound(format!("cohort {cohort_id}")))
}
