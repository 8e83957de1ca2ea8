use crate::core::attendance::{DisplayState, MeetingAssessment, assess_cohort};
use crate::core::calendar::expand;
use crate::core::status::{LifecycleStatus, effective_window, status_of, status_of_event};
use crate::models::attendance::AttendanceIndex;
use crate::models::cohort::Cohort;
use crate::models::event::Event;
use crate::models::policy::ConfirmationPolicy;
use crate::models::window::Window;
use crate::utils::date::Instant;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct CohortSummary {
    pub id: String,
    pub name: String,
    pub window: Window,
    pub status: LifecycleStatus,
    pub meeting_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventSummary {
    pub id: String,
    pub title: String,
    pub window: Option<Window>,
    pub status: LifecycleStatus,
    pub cohorts: Vec<CohortSummary>,
}

/// One participant's meetings in a cohort, with counts per state.
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantReport {
    pub cohort: CohortSummary,
    pub participant_id: String,
    pub rows: Vec<MeetingAssessment>,
    pub counts: BTreeMap<&'static str, usize>,
}

impl ParticipantReport {
    pub fn count(&self, state: DisplayState) -> usize {
        self.counts.get(state.label()).copied().unwrap_or(0)
    }
}

pub struct Core;

impl Core {
    pub fn summarize_cohort(cohort: &Cohort, at: &Instant) -> CohortSummary {
        let window = cohort.window();
        CohortSummary {
            id: cohort.id.clone(),
            name: cohort.name.clone(),
            window,
            status: status_of(&window, at),
            meeting_count: expand(cohort).len(),
        }
    }

    pub fn summarize_event(event: &Event, at: &Instant) -> EventSummary {
        EventSummary {
            id: event.id.clone(),
            title: event.title.clone(),
            window: effective_window(event),
            status: status_of_event(event, at),
            cohorts: event
                .cohorts
                .iter()
                .map(|c| Self::summarize_cohort(c, at))
                .collect(),
        }
    }

    pub fn participant_report(
        cohort: &Cohort,
        participant_id: &str,
        index: &AttendanceIndex,
        policy: &ConfirmationPolicy,
        at: &Instant,
    ) -> ParticipantReport {
        let rows = assess_cohort(cohort, participant_id, index, policy, at);

        let mut counts: BTreeMap<&'static str, usize> = DisplayState::ALL
            .iter()
            .map(|s| (s.label(), 0))
            .collect();
        for r in &rows {
            *counts.entry(r.state.label()).or_insert(0) += 1;
        }

        ParticipantReport {
            cohort: Self::summarize_cohort(cohort, at),
            participant_id: participant_id.to_string(),
            rows,
            counts,
        }
    }
}
