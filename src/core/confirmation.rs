//! Validation and submission of "mark present" requests.
//!
//! The engine only decides whether a request may be sent; the write itself
//! belongs to an [`AttendanceService`], which must be idempotent.

use crate::core::attendance::{DisplayState, display_state};
use crate::core::calendar::meeting_on;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceIndex;
use crate::models::cohort::Cohort;
use crate::models::policy::ConfirmationPolicy;
use crate::utils::date::Instant;
use chrono::NaiveDate;
use log::{debug, info};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationRequest {
    pub participant_id: String,
    pub cohort_id: String,
    pub date: NaiveDate,
    pub requested_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// Already present; the desired end state holds.
    AlreadyConfirmed,
    WindowNotOpen,
    WindowClosed,
}

impl Rejection {
    pub fn is_benign(&self) -> bool {
        matches!(self, Rejection::AlreadyConfirmed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Proceed(ConfirmationRequest),
    Rejected(Rejection),
}

/// Result of a write to the attendance service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    /// First confirmation stored (HTTP 201).
    Created,
    /// A confirmation already existed (HTTP 409).
    Conflict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationOutcome {
    Confirmed,
    AlreadyConfirmed,
}

/// The remote owner of presence records.
pub trait AttendanceService {
    fn confirm(&mut self, request: &ConfirmationRequest) -> AppResult<WriteStatus>;
}

pub fn request_confirmation(
    participant_id: &str,
    cohort_id: &str,
    date: NaiveDate,
    at: Instant,
    state: DisplayState,
) -> Verdict {
    match state {
        DisplayState::Present => Verdict::Rejected(Rejection::AlreadyConfirmed),
        DisplayState::Awaiting => Verdict::Rejected(Rejection::WindowNotOpen),
        DisplayState::Closed | DisplayState::Absent => Verdict::Rejected(Rejection::WindowClosed),
        DisplayState::Confirmable => Verdict::Proceed(ConfirmationRequest {
            participant_id: participant_id.to_string(),
            cohort_id: cohort_id.to_string(),
            date,
            requested_at: at,
        }),
    }
}

/// Send an accepted request. A conflict from the service and an
/// `AlreadyConfirmed` rejection both count as success. No retries.
pub fn submit<S: AttendanceService + ?Sized>(
    service: &mut S,
    verdict: Verdict,
) -> AppResult<ConfirmationOutcome> {
    let request = match verdict {
        Verdict::Proceed(r) => r,
        Verdict::Rejected(r) if r.is_benign() => {
            return Ok(ConfirmationOutcome::AlreadyConfirmed);
        }
        Verdict::Rejected(Rejection::WindowNotOpen) => return Err(AppError::WindowNotOpen),
        Verdict::Rejected(_) => return Err(AppError::WindowClosed),
    };

    let status = service.confirm(&request).map_err(|e| match e {
        AppError::TransportFailure(_) => e,
        other => AppError::TransportFailure(other.to_string()),
    })?;

    let outcome = match status {
        WriteStatus::Created => ConfirmationOutcome::Confirmed,
        WriteStatus::Conflict => ConfirmationOutcome::AlreadyConfirmed,
    };

    info!(
        "presence cohort={} user={} date={} outcome={outcome:?}",
        request.cohort_id, request.participant_id, request.date
    );
    Ok(outcome)
}

/// Full flow for one participant and day: locate the meeting, compute its
/// state from `index`, validate, and submit.
pub fn confirm_meeting<S: AttendanceService + ?Sized>(
    service: &mut S,
    cohort: &Cohort,
    participant_id: &str,
    date: NaiveDate,
    index: &AttendanceIndex,
    policy: &ConfirmationPolicy,
    at: Instant,
) -> AppResult<ConfirmationOutcome> {
    let meeting = meeting_on(cohort, date).ok_or_else(|| {
        AppError::NotFound(format!("cohort {} has no meeting on {date}", cohort.id))
    })?;

    let record = index.get(&cohort.id, participant_id, date);
    let state = display_state(&meeting, &cohort.window(), policy, record, &at);
    debug!("cohort {} user {participant_id} {date}: state {state:?}", cohort.id);

    submit(
        service,
        request_confirmation(participant_id, &cohort.id, date, at, state),
    )
}
