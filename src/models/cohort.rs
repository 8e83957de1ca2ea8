use crate::models::meeting::{Meeting, normalize_meetings};
use crate::models::raw::RawCohort;
use crate::models::window::Window;
use crate::utils::date::parse_optional_date;
use crate::utils::time::{END_OF_DAY, START_OF_DAY, parse_optional_time};
use chrono::{NaiveDate, NaiveTime};
use log::warn;

/// A scheduled run ("turma") of an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cohort {
    pub id: String,
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    /// Explicit meetings, already sorted and deduplicated.
    pub meetings: Vec<Meeting>,
}

impl Cohort {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            start_date: None,
            end_date: None,
            start_time: None,
            end_time: None,
            meetings: Vec::new(),
        }
    }

    pub fn with_dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn with_times(mut self, start: Option<NaiveTime>, end: Option<NaiveTime>) -> Self {
        self.start_time = start;
        self.end_time = end;
        self
    }

    pub fn with_meetings(mut self, meetings: Vec<Meeting>) -> Self {
        self.meetings = normalize_meetings(meetings);
        self
    }

    pub fn from_raw(raw: &RawCohort) -> Self {
        let id = raw.id.to_string();

        let start_date = parse_optional_date(raw.data_inicio.as_deref());
        let end_date = parse_optional_date(raw.data_fim.as_deref());
        if raw.data_inicio.is_some() && start_date.is_none() {
            warn!("cohort {id}: unparseable data_inicio {:?}", raw.data_inicio);
        }
        if raw.data_fim.is_some() && end_date.is_none() {
            warn!("cohort {id}: unparseable data_fim {:?}", raw.data_fim);
        }

        let start_time = parse_optional_time(raw.horario_inicio.as_deref());
        let end_time = parse_optional_time(raw.horario_fim.as_deref());

        let default_start = start_time.unwrap_or(START_OF_DAY);
        let default_end = end_time.unwrap_or(END_OF_DAY);
        let meetings = raw
            .explicit_meetings()
            .iter()
            .map(|m| Meeting::from_raw(m, default_start, default_end))
            .collect();

        Self {
            name: raw.nome.clone().unwrap_or_else(|| format!("Turma {id}")),
            id,
            start_date,
            end_date,
            start_time,
            end_time,
            meetings: Vec::new(),
        }
        .with_meetings(meetings)
    }

    pub fn nominal_start_time(&self) -> NaiveTime {
        self.start_time.unwrap_or(START_OF_DAY)
    }

    pub fn nominal_end_time(&self) -> NaiveTime {
        self.end_time.unwrap_or(END_OF_DAY)
    }

    /// Nominal window. A missing date bound is taken from the first / last
    /// explicit meeting when there is one.
    pub fn window(&self) -> Window {
        let first = self.meetings.iter().find(|m| m.date.is_some());
        let last = self.meetings.iter().rev().find(|m| m.date.is_some());

        let nominal = Window::from_parts(
            self.start_date,
            self.start_time,
            self.end_date,
            self.end_time,
        );

        Window {
            start: nominal
                .start
                .or_else(|| first.and_then(|m| m.start_instant().ok())),
            end: nominal.end.or_else(|| last.and_then(|m| m.end_instant().ok())),
        }
    }
}
