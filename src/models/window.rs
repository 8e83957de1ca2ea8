use crate::utils::date::{Instant, to_instant};
use crate::utils::time::{END_OF_DAY, START_OF_DAY};
use chrono::{NaiveDate, NaiveTime};
use log::debug;
use serde::Serialize;

/// A start/end pair used for lifecycle computations. Either bound may be
/// unknown; an inverted window is kept as-is and reported as degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Window {
    pub start: Option<Instant>,
    pub end: Option<Instant>,
}

impl Window {
    pub fn new(start: Option<Instant>, end: Option<Instant>) -> Self {
        Self { start, end }
    }

    pub fn bounded(start: Instant, end: Instant) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Build a window from calendar parts. Missing times fall back to
    /// `00:00` / `23:59`; a bound that cannot be resolved stays unknown.
    pub fn from_parts(
        start_date: Option<NaiveDate>,
        start_time: Option<NaiveTime>,
        end_date: Option<NaiveDate>,
        end_time: Option<NaiveTime>,
    ) -> Self {
        let start = start_date.and_then(|d| {
            to_instant(d, start_time.unwrap_or(START_OF_DAY))
                .inspect_err(|e| debug!("window start unresolved: {e}"))
                .ok()
        });
        let end = end_date.and_then(|d| {
            to_instant(d, end_time.unwrap_or(END_OF_DAY))
                .inspect_err(|e| debug!("window end unresolved: {e}"))
                .ok()
        });
        Self { start, end }
    }

    pub fn has_any_bound(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// `end < start`. Bounds are never swapped.
    pub fn is_degenerate(&self) -> bool {
        matches!((self.start, self.end), (Some(s), Some(e)) if e < s)
    }

    /// Smallest window covering both: min of known starts, max of known ends.
    pub fn union(&self, other: &Window) -> Window {
        let start = match (self.start, other.start) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        let end = match (self.end, other.end) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        Window { start, end }
    }
}
