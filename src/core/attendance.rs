//! Confirmation windows and the per-meeting display state.

use crate::core::calendar::expand;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendanceIndex, AttendanceRecord};
use crate::models::cohort::Cohort;
use crate::models::meeting::Meeting;
use crate::models::policy::{ConfirmationPolicy, DeadlineAnchor};
use crate::models::window::Window;
use crate::utils::date::Instant;
use log::{debug, warn};
use serde::Serialize;
use std::fmt;

/// Span during which a meeting's attendance may be confirmed (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfirmationWindow {
    pub opens_at: Instant,
    pub closes_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayState {
    Awaiting,
    Confirmable,
    Present,
    Absent,
    Closed,
}

impl DisplayState {
    pub fn label(&self) -> &'static str {
        match self {
            DisplayState::Awaiting => "Aguardando",
            DisplayState::Confirmable => "Confirmar",
            DisplayState::Present => "Presente",
            DisplayState::Absent => "Ausente",
            DisplayState::Closed => "Encerrado",
        }
    }

    pub const ALL: [DisplayState; 5] = [
        DisplayState::Awaiting,
        DisplayState::Confirmable,
        DisplayState::Present,
        DisplayState::Absent,
        DisplayState::Closed,
    ];
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Confirmation window of one meeting.
///
/// Opens `open_delay` after the meeting starts. Closes `close_deadline` after
/// the cohort's end, or after the meeting's own end with
/// [`DeadlineAnchor::MeetingEnd`].
pub fn window_for(
    meeting: &Meeting,
    cohort_window: &Window,
    policy: &ConfirmationPolicy,
) -> AppResult<ConfirmationWindow> {
    let out_of_range = || AppError::InvalidWindow("policy offset out of range".into());

    let opens_at = meeting
        .start_instant()?
        .checked_add_signed(policy.open_delay)
        .ok_or_else(out_of_range)?;

    let anchor = match policy.anchor {
        DeadlineAnchor::CohortEnd => cohort_window
            .end
            .ok_or_else(|| AppError::InvalidWindow("cohort has no end date".into()))?,
        DeadlineAnchor::MeetingEnd => meeting.end_instant()?,
    };

    let closes_at = anchor
        .checked_add_signed(policy.close_deadline)
        .ok_or_else(out_of_range)?;

    Ok(ConfirmationWindow {
        opens_at,
        closes_at,
    })
}

/// What a participant should see for one meeting at `at`.
///
/// A meeting whose window cannot be computed is shown as awaiting, never as
/// an error, so one bad record cannot break a whole list.
pub fn display_state(
    meeting: &Meeting,
    cohort_window: &Window,
    policy: &ConfirmationPolicy,
    record: Option<&AttendanceRecord>,
    at: &Instant,
) -> DisplayState {
    resolve(meeting, cohort_window, policy, record, at).1
}

fn resolve(
    meeting: &Meeting,
    cohort_window: &Window,
    policy: &ConfirmationPolicy,
    record: Option<&AttendanceRecord>,
    at: &Instant,
) -> (Option<ConfirmationWindow>, DisplayState) {
    let window = window_for(meeting, cohort_window, policy)
        .inspect_err(|e| warn!("meeting '{}': {e}; confirmation disabled", meeting.raw_date))
        .ok();

    if record.is_some_and(|r| r.present) {
        return (window, DisplayState::Present);
    }

    let Some(w) = window else {
        return (None, DisplayState::Awaiting);
    };

    let state = if *at < w.opens_at {
        DisplayState::Awaiting
    } else if *at <= w.closes_at {
        DisplayState::Confirmable
    } else {
        match meeting.end_instant() {
            Ok(end) if end < *at => DisplayState::Absent,
            _ => DisplayState::Closed,
        }
    };

    (Some(w), state)
}

/// Everything a list row needs for one meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingAssessment {
    pub meeting: Meeting,
    pub window: Option<ConfirmationWindow>,
    pub state: DisplayState,
    pub can_confirm: bool,
}

pub fn assess(
    meeting: &Meeting,
    cohort_window: &Window,
    policy: &ConfirmationPolicy,
    record: Option<&AttendanceRecord>,
    at: &Instant,
) -> MeetingAssessment {
    let (window, state) = resolve(meeting, cohort_window, policy, record, at);
    MeetingAssessment {
        meeting: meeting.clone(),
        window,
        state,
        can_confirm: state == DisplayState::Confirmable,
    }
}

/// Assess every meeting of a cohort for one participant. Each meeting is
/// evaluated on its own.
pub fn assess_cohort(
    cohort: &Cohort,
    participant_id: &str,
    index: &AttendanceIndex,
    policy: &ConfirmationPolicy,
    at: &Instant,
) -> Vec<MeetingAssessment> {
    let cohort_window = cohort.window();
    let rows: Vec<MeetingAssessment> = expand(cohort)
        .map(|m| {
            let record = m
                .date
                .and_then(|d| index.get(&cohort.id, participant_id, d));
            assess(&m, &cohort_window, policy, record, at)
        })
        .collect();

    debug!(
        "cohort {} participant {participant_id}: {} meetings assessed",
        cohort.id,
        rows.len()
    );
    rows
}
