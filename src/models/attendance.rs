use crate::errors::AppResult;
use crate::models::raw::RawAttendance;
use crate::utils::date::{Instant, parse_date_only, parse_instant};
use chrono::{DateTime, Local, NaiveDate};
use log::warn;
use serde::Serialize;
use std::collections::HashMap;

/// A presence record owned by the attendance service. Read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    pub cohort_id: String,
    pub participant_id: String,
    pub date: NaiveDate,
    pub present: bool,
    pub confirmed_at: Option<Instant>,
}

impl AttendanceRecord {
    pub fn present(cohort_id: &str, participant_id: &str, date: NaiveDate) -> Self {
        Self {
            cohort_id: cohort_id.to_string(),
            participant_id: participant_id.to_string(),
            date,
            present: true,
            confirmed_at: None,
        }
    }

    pub fn from_raw(raw: &RawAttendance) -> AppResult<Self> {
        Ok(Self {
            cohort_id: raw.turma_id.to_string(),
            participant_id: raw.usuario_id.to_string(),
            date: parse_date_only(&raw.data)?,
            present: raw.presente,
            confirmed_at: raw.confirmado_em.as_deref().and_then(parse_timestamp),
        })
    }
}

/// RFC 3339 first (what the service sends), then the local `YYYY-MM-DD HH:MM` form.
pub fn parse_timestamp(s: &str) -> Option<Instant> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Local))
        .ok()
        .or_else(|| parse_instant(s).ok())
}

type Key = (String, String, NaiveDate);

/// Immutable lookup of presence records by (cohort, participant, date).
///
/// Built and owned by the caller, typically per cohort, and handed to the
/// engine on every evaluation.
#[derive(Debug, Clone, Default)]
pub struct AttendanceIndex {
    records: HashMap<Key, AttendanceRecord>,
}

impl AttendanceIndex {
    pub fn from_records<I: IntoIterator<Item = AttendanceRecord>>(records: I) -> Self {
        let mut map: HashMap<Key, AttendanceRecord> = HashMap::new();
        for r in records {
            let key = (r.cohort_id.clone(), r.participant_id.clone(), r.date);
            match map.get(&key) {
                // a positive confirmation is never downgraded by a duplicate
                Some(existing) if existing.present && !r.present => {}
                _ => {
                    map.insert(key, r);
                }
            }
        }
        Self { records: map }
    }

    /// Malformed rows are skipped with a warning.
    pub fn from_raw(raws: &[RawAttendance]) -> Self {
        Self::from_records(raws.iter().filter_map(|raw| {
            AttendanceRecord::from_raw(raw)
                .inspect_err(|e| {
                    warn!(
                        "skipping presence record for user {} in cohort {}: {e}",
                        raw.usuario_id, raw.turma_id
                    )
                })
                .ok()
        }))
    }

    pub fn get(&self, cohort_id: &str, participant_id: &str, date: NaiveDate) -> Option<&AttendanceRecord> {
        self.records
            .get(&(cohort_id.to_string(), participant_id.to_string(), date))
    }

    pub fn is_present(&self, cohort_id: &str, participant_id: &str, date: NaiveDate) -> bool {
        self.get(cohort_id, participant_id, date)
            .is_some_and(|r| r.present)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
