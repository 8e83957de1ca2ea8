//! Expansion of a cohort into its individual meeting occurrences.

use crate::models::cohort::Cohort;
use crate::models::meeting::Meeting;
use chrono::{NaiveDate, NaiveTime};
use std::slice;

/// Lazy sequence of meetings for one cohort. Each call to [`expand`] starts a
/// fresh iterator; nothing is cached between calls.
#[derive(Debug, Clone)]
pub enum Meetings<'a> {
    Explicit(slice::Iter<'a, Meeting>),
    Range {
        next: Option<NaiveDate>,
        last: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    },
    Empty,
}

impl Iterator for Meetings<'_> {
    type Item = Meeting;

    fn next(&mut self) -> Option<Meeting> {
        match self {
            Meetings::Explicit(iter) => iter.next().cloned(),
            Meetings::Range {
                next,
                last,
                start,
                end,
            } => {
                let day = (*next).filter(|d| *d <= *last)?;
                *next = day.succ_opt();
                Some(Meeting::new(day, *start, *end))
            }
            Meetings::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Meetings::Explicit(iter) => iter.size_hint(),
            Meetings::Range { next, last, .. } => {
                let n = next
                    .map(|d| (*last - d).num_days() + 1)
                    .filter(|n| *n > 0)
                    .unwrap_or(0) as usize;
                (n, Some(n))
            }
            Meetings::Empty => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for Meetings<'_> {}

/// Meetings of a cohort, ascending by date.
///
/// Explicit meetings are authoritative. Otherwise every day from the cohort's
/// start date to its end date (inclusive) becomes a meeting with the cohort's
/// nominal times. Without both dates there is nothing to expand.
pub fn expand(cohort: &Cohort) -> Meetings<'_> {
    if !cohort.meetings.is_empty() {
        return Meetings::Explicit(cohort.meetings.iter());
    }

    match (cohort.start_date, cohort.end_date) {
        (Some(first), Some(last)) => Meetings::Range {
            next: Some(first),
            last,
            start: cohort.nominal_start_time(),
            end: cohort.nominal_end_time(),
        },
        _ => Meetings::Empty,
    }
}

/// Locate the meeting for a given day.
pub fn meeting_on(cohort: &Cohort, date: NaiveDate) -> Option<Meeting> {
    expand(cohort).find(|m| m.date == Some(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::raw::RawCohort;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn cohort(json: &str) -> Cohort {
        let raw: RawCohort = serde_json::from_str(json).unwrap();
        Cohort::from_raw(&raw)
    }

    #[test]
    fn range_is_inclusive_and_ordered() {
        let c = cohort(r#"{"id": 1, "data_inicio": "2025-03-10", "data_fim": "2025-03-12"}"#);
        let dates: Vec<_> = expand(&c).map(|m| m.date.unwrap()).collect();
        assert_eq!(dates, vec![d(2025, 3, 10), d(2025, 3, 11), d(2025, 3, 12)]);
        assert_eq!(expand(&c).len(), 3);
    }

    #[test]
    fn range_inherits_nominal_times() {
        let c = cohort(
            r#"{"id": 1, "data_inicio": "2025-03-10", "data_fim": "2025-03-10",
                "horario_inicio": "09:00"}"#,
        );
        let m: Vec<_> = expand(&c).collect();
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].start_str(), "09:00");
        assert_eq!(m[0].end_str(), "23:59");
    }

    #[test]
    fn range_crosses_month_and_leap_day() {
        let c = cohort(r#"{"id": 1, "data_inicio": "2024-02-28", "data_fim": "2024-03-01"}"#);
        let dates: Vec<_> = expand(&c).map(|m| m.date.unwrap()).collect();
        assert_eq!(dates, vec![d(2024, 2, 28), d(2024, 2, 29), d(2024, 3, 1)]);
    }

    #[test]
    fn explicit_meetings_win_over_range() {
        let c = cohort(
            r#"{"id": 1, "data_inicio": "2025-03-01", "data_fim": "2025-03-31",
                "datas": ["2025-03-20", "2025-03-05"]}"#,
        );
        let dates: Vec<_> = expand(&c).map(|m| m.date.unwrap()).collect();
        assert_eq!(dates, vec![d(2025, 3, 5), d(2025, 3, 20)]);
    }

    #[test]
    fn missing_or_inverted_dates_yield_nothing() {
        assert_eq!(expand(&cohort(r#"{"id": 1, "data_inicio": "2025-03-10"}"#)).count(), 0);
        let inverted = cohort(r#"{"id": 1, "data_inicio": "2025-03-12", "data_fim": "2025-03-10"}"#);
        assert_eq!(expand(&inverted).count(), 0);
        assert_eq!(expand(&inverted).len(), 0);
    }

    #[test]
    fn expansion_is_restartable() {
        let c = cohort(r#"{"id": 1, "data_inicio": "2025-03-10", "data_fim": "2025-03-11"}"#);
        let first: Vec<_> = expand(&c).collect();
        let second: Vec<_> = expand(&c).collect();
        assert_eq!(first, second);
        assert_eq!(meeting_on(&c, d(2025, 3, 11)).unwrap().date, Some(d(2025, 3, 11)));
        assert!(meeting_on(&c, d(2025, 3, 12)).is_none());
    }
}
