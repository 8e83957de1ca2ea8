use crate::errors::{AppError, AppResult};
use crate::models::raw::RawMeeting;
use crate::models::window::Window;
use crate::utils::date::{Instant, Locale, format_date, parse_optional_date, to_instant};
use crate::utils::time::parse_optional_time;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One calendar-day occurrence ("encontro") of a cohort.
///
/// `date` is `None` when an explicit meeting carried a malformed date; such a
/// meeting is kept so it can be shown as awaiting instead of vanishing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meeting {
    pub date: Option<NaiveDate>,
    pub raw_date: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Meeting {
    pub fn new(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            date: Some(date),
            raw_date: date.format("%Y-%m-%d").to_string(),
            start,
            end,
        }
    }

    /// Convert an explicit wire meeting. Missing times inherit `default_start`
    /// / `default_end` (the cohort's nominal times or the day fallbacks).
    pub fn from_raw(raw: &RawMeeting, default_start: NaiveTime, default_end: NaiveTime) -> Self {
        let (data, hi, hf) = match raw {
            RawMeeting::Plain(s) => (Some(s.as_str()), None, None),
            RawMeeting::Detailed {
                data,
                horario_inicio,
                horario_fim,
            } => (
                data.as_deref(),
                horario_inicio.as_deref(),
                horario_fim.as_deref(),
            ),
        };

        Self {
            date: parse_optional_date(data),
            raw_date: data.unwrap_or_default().to_string(),
            start: parse_optional_time(hi).unwrap_or(default_start),
            end: parse_optional_time(hf).unwrap_or(default_end),
        }
    }

    fn require_date(&self) -> AppResult<NaiveDate> {
        self.date.ok_or_else(|| {
            AppError::InvalidWindow(format!("meeting date '{}' is not a valid date", self.raw_date))
        })
    }

    pub fn start_instant(&self) -> AppResult<Instant> {
        to_instant(self.require_date()?, self.start)
    }

    pub fn end_instant(&self) -> AppResult<Instant> {
        to_instant(self.require_date()?, self.end)
    }

    /// The meeting's own window (unknown bounds for a malformed date).
    pub fn window(&self) -> Window {
        Window::new(self.start_instant().ok(), self.end_instant().ok())
    }

    pub fn date_label(&self, locale: Locale) -> String {
        match self.date {
            Some(d) => format_date(d, locale),
            None if self.raw_date.is_empty() => "--/--/----".to_string(),
            None => self.raw_date.clone(),
        }
    }

    pub fn start_str(&self) -> String {
        self.start.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%H:%M").to_string()
    }
}

/// Sort by date (malformed dates last, relative order kept) and keep the
/// first meeting of each date.
pub fn normalize_meetings(mut meetings: Vec<Meeting>) -> Vec<Meeting> {
    meetings.sort_by_key(|m| (m.date.is_none(), m.date));
    meetings.dedup_by(|b, a| a.date.is_some() && a.date == b.date);
    meetings
}
