//! Terminal styles for status badges.

use crate::core::attendance::DisplayState;
use crate::core::status::LifecycleStatus;
use ansi_term::Colour::{Blue, Cyan, Green, Red, Yellow};
use ansi_term::Style;

pub fn style_for_status(status: LifecycleStatus) -> Style {
    match status {
        LifecycleStatus::Scheduled => Blue.normal(),
        LifecycleStatus::InProgress => Green.bold(),
        LifecycleStatus::Finished => Style::new().dimmed(),
        LifecycleStatus::Unknown => Yellow.normal(),
    }
}

pub fn style_for_state(state: DisplayState) -> Style {
    match state {
        DisplayState::Awaiting => Style::new().dimmed(),
        DisplayState::Confirmable => Cyan.bold(),
        DisplayState::Present => Green.bold(),
        DisplayState::Absent => Red.normal(),
        DisplayState::Closed => Yellow.normal(),
    }
}

/// `[Label]`, colored when `color` is set.
pub fn status_badge(status: LifecycleStatus, color: bool) -> String {
    let text = format!("[{}]", status.label());
    if color {
        style_for_status(status).paint(text).to_string()
    } else {
        text
    }
}
