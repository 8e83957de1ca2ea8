//! The decision engine: calendar expansion, lifecycle status, confirmation
//! windows and confirmation requests. Pure functions of their inputs and an
//! explicit "now".

pub mod attendance;
pub mod calendar;
pub mod confirmation;
pub mod report;
pub mod status;

pub use attendance::{ConfirmationWindow, DisplayState, MeetingAssessment, display_state, window_for};
pub use calendar::expand;
pub use confirmation::{
    AttendanceService, ConfirmationOutcome, ConfirmationRequest, Rejection, Verdict, WriteStatus,
    request_confirmation, submit,
};
pub use status::{LifecycleStatus, status_of, status_of_event};
