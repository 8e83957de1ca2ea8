use crate::errors::AppResult;
use crate::models::cohort::Cohort;
use crate::models::raw::RawEvent;
use crate::models::window::Window;
use crate::utils::date::parse_optional_date;
use crate::utils::time::parse_optional_time;
use std::fs;
use std::path::Path;

/// A top-level offering composed of one or more cohorts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub cohorts: Vec<Cohort>,
    /// Event-level dates, used only when no cohort contributes a bound.
    pub fallback_window: Option<Window>,
}

impl Event {
    pub fn new(id: &str, title: &str, cohorts: Vec<Cohort>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            cohorts,
            fallback_window: None,
        }
    }

    pub fn with_fallback(mut self, window: Window) -> Self {
        self.fallback_window = Some(window);
        self
    }

    pub fn from_raw(raw: &RawEvent) -> Self {
        let id = raw.id.to_string();

        let cohorts = raw
            .turmas
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(Cohort::from_raw)
            .collect();

        let fallback = Window::from_parts(
            parse_optional_date(raw.data_inicio.as_deref()),
            parse_optional_time(raw.horario_inicio.as_deref()),
            parse_optional_date(raw.data_fim.as_deref()),
            parse_optional_time(raw.horario_fim.as_deref()),
        );

        Self {
            title: raw.titulo.clone().unwrap_or_else(|| format!("Evento {id}")),
            id,
            cohorts,
            fallback_window: fallback.has_any_bound().then_some(fallback),
        }
    }

    /// Load one event or a list of events from a JSON file.
    pub fn load_file(path: &Path) -> AppResult<Vec<Event>> {
        let content = fs::read_to_string(path)?;
        Self::parse_json(&content)
    }

    pub fn parse_json(content: &str) -> AppResult<Vec<Event>> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        let raws: Vec<RawEvent> = if value.is_array() {
            serde_json::from_value(value)?
        } else {
            vec![serde_json::from_value(value)?]
        };
        Ok(raws.iter().map(Event::from_raw).collect())
    }

    pub fn cohort(&self, id: &str) -> Option<&Cohort> {
        self.cohorts.iter().find(|c| c.id == id)
    }
}
