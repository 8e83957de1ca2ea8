//! Lifecycle status of cohorts and events, derived purely from their windows.
//!
//! Nothing is stored: every call recomputes from the window and the instant
//! it is given, so a stale clock or stale data never needs invalidation.

use crate::models::event::Event;
use crate::models::window::Window;
use crate::utils::date::Instant;
use log::debug;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStatus {
    Scheduled,
    InProgress,
    Finished,
    Unknown,
}

impl LifecycleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LifecycleStatus::Scheduled => "Programado",
            LifecycleStatus::InProgress => "Em andamento",
            LifecycleStatus::Finished => "Encerrado",
            LifecycleStatus::Unknown => "Indefinido",
        }
    }
}

impl fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status of a single window at `at`. Both bounds are inclusive.
pub fn status_of(window: &Window, at: &Instant) -> LifecycleStatus {
    let (Some(start), Some(end)) = (window.start, window.end) else {
        return LifecycleStatus::Unknown;
    };

    if end < start {
        return LifecycleStatus::Unknown;
    }

    if *at < start {
        LifecycleStatus::Scheduled
    } else if *at > end {
        LifecycleStatus::Finished
    } else {
        LifecycleStatus::InProgress
    }
}

/// Union of the cohort windows that have at least one known bound, or the
/// event's fallback window when no cohort contributes.
pub fn effective_window(event: &Event) -> Option<Window> {
    event
        .cohorts
        .iter()
        .map(|c| c.window())
        .filter(Window::has_any_bound)
        .reduce(|acc, w| acc.union(&w))
        .or(event.fallback_window)
}

/// Status of an event made of several cohorts.
///
/// A cohort running at `at` makes the event in progress. When `at` falls in a
/// gap between disjoint cohorts the event is scheduled if a cohort is still
/// ahead, otherwise finished.
pub fn status_of_event(event: &Event, at: &Instant) -> LifecycleStatus {
    let Some(window) = effective_window(event) else {
        debug!("event {}: no dates available", event.id);
        return LifecycleStatus::Unknown;
    };

    let per_cohort: Vec<LifecycleStatus> = event
        .cohorts
        .iter()
        .map(|c| status_of(&c.window(), at))
        .collect();

    if per_cohort.contains(&LifecycleStatus::InProgress) {
        return LifecycleStatus::InProgress;
    }

    let aggregate = status_of(&window, at);
    let any_known = per_cohort.iter().any(|s| *s != LifecycleStatus::Unknown);

    if aggregate == LifecycleStatus::InProgress && any_known {
        let resolved = if per_cohort.contains(&LifecycleStatus::Scheduled) {
            LifecycleStatus::Scheduled
        } else {
            LifecycleStatus::Finished
        };
        debug!("event {}: between cohorts, reporting {resolved:?}", event.id);
        return resolved;
    }

    aggregate
}
