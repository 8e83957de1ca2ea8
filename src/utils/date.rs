//! Date utilities: date-only parsing, local instant composition, locale formatting.
//!
//! A bare `YYYY-MM-DD` is a calendar day, not UTC midnight. Instants are always
//! composed from date and time components and resolved in the local zone, so a
//! day never shifts when the host sits behind UTC.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// A concrete point in time in the local timezone.
pub type Instant = DateTime<Local>;

// YYYY-MM-DD, optionally followed by a time component that is discarded.
static DATE_ONLY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})(?:[T ].*)?$").expect("static date pattern")
});

// Longest DST gap seen in practice is one hour; three leaves headroom.
const MAX_GAP_MINUTES: i64 = 180;

pub fn parse_date_only(s: &str) -> AppResult<NaiveDate> {
    let trimmed = s.trim();
    let caps = DATE_ONLY_RE
        .captures(trimmed)
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))?;

    let year: i32 = caps[1]
        .parse()
        .map_err(|_| AppError::InvalidDate(s.to_string()))?;
    let month: u32 = caps[2]
        .parse()
        .map_err(|_| AppError::InvalidDate(s.to_string()))?;
    let day: u32 = caps[3]
        .parse()
        .map_err(|_| AppError::InvalidDate(s.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Lenient variant used by record conversion: `None` for absent or malformed input.
pub fn parse_optional_date(s: Option<&str>) -> Option<NaiveDate> {
    match s {
        Some(raw) if !raw.trim().is_empty() => parse_date_only(raw).ok(),
        _ => None,
    }
}

/// Compose a local instant from its calendar components.
///
/// Ambiguous wall-clock times (DST fall-back) resolve to the earlier mapping.
/// Wall-clock times that do not exist (DST spring-forward) move to the first
/// valid minute after the gap.
pub fn to_instant(date: NaiveDate, time: NaiveTime) -> AppResult<Instant> {
    let naive = date.and_time(time);
    resolve_in(&Local, naive).ok_or_else(|| AppError::InvalidDate(naive.to_string()))
}

fn resolve_in<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => (1..=MAX_GAP_MINUTES).find_map(|m| {
            tz.from_local_datetime(&(naive + Duration::minutes(m)))
                .earliest()
        }),
    }
}

pub fn compare_instant(a: &Instant, b: &Instant) -> Ordering {
    a.cmp(b)
}

/// Parse a user-provided point in time: `YYYY-MM-DD`, `YYYY-MM-DD HH:MM` or
/// `YYYY-MM-DDTHH:MM` (seconds optional). A bare date means start of day.
pub fn parse_instant(s: &str) -> AppResult<Instant> {
    let trimmed = s.trim();
    let date = parse_date_only(trimmed)?;
    let time_part = trimmed
        .get(10..)
        .map(|rest| rest.trim_start_matches(['T', ' ']))
        .unwrap_or("");

    let time = if time_part.is_empty() {
        NaiveTime::MIN
    } else {
        crate::utils::time::parse_time_strict(time_part)
            .ok_or_else(|| AppError::InvalidTime(time_part.to_string()))?
    };

    to_instant(date, time)
}

/// Display locale for calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "iso")]
    Iso,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::EnUs => "en-US",
            Locale::Iso => "iso",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pt-br" | "pt" => Ok(Locale::PtBr),
            "en-us" | "en" => Ok(Locale::EnUs),
            "iso" => Ok(Locale::Iso),
            other => Err(AppError::Config(format!("unknown locale '{other}'"))),
        }
    }
}

/// Render a calendar day. Pure formatting, no timezone math.
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::PtBr => date.format("%d/%m/%Y").to_string(),
        Locale::EnUs => date.format("%m/%d/%Y").to_string(),
        Locale::Iso => date.format("%Y-%m-%d").to_string(),
    }
}

pub fn format_instant(at: &Instant, locale: Locale) -> String {
    format!("{} {}", format_date(at.date_naive(), locale), at.format("%H:%M"))
}
