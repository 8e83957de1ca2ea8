use crate::errors::{AppError, AppResult};
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// What the trailing confirmation deadline is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineAnchor {
    #[default]
    CohortEnd,
    MeetingEnd,
}

/// When a meeting's attendance may be manually confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationPolicy {
    /// Delay after the meeting start before confirmation opens.
    pub open_delay: Duration,
    /// Grace period after the anchor before confirmation closes.
    pub close_deadline: Duration,
    pub anchor: DeadlineAnchor,
}

impl Default for ConfirmationPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl ConfirmationPolicy {
    pub const PRESETS: [&'static str; 3] = ["standard", "short", "flat-48h"];

    pub fn new(open_delay: Duration, close_deadline: Duration, anchor: DeadlineAnchor) -> Self {
        Self {
            open_delay,
            close_deadline,
            anchor,
        }
    }

    /// 60 minutes after start, until 60 days after the cohort ends.
    pub fn standard() -> Self {
        Self::new(Duration::minutes(60), Duration::days(60), DeadlineAnchor::CohortEnd)
    }

    /// 60 minutes after start, until 15 days after the cohort ends.
    pub fn short() -> Self {
        Self::new(Duration::minutes(60), Duration::days(15), DeadlineAnchor::CohortEnd)
    }

    /// From the meeting start until 48 hours after the meeting ends.
    pub fn flat_48h() -> Self {
        Self::new(Duration::zero(), Duration::hours(48), DeadlineAnchor::MeetingEnd)
    }

    pub fn preset(name: &str) -> AppResult<Self> {
        match name.to_lowercase().as_str() {
            "standard" => Ok(Self::standard()),
            "short" => Ok(Self::short()),
            "flat-48h" | "flat_48h" | "48h" => Ok(Self::flat_48h()),
            other => Err(AppError::Config(format!(
                "unknown policy preset '{other}' (expected one of: {})",
                Self::PRESETS.join(", ")
            ))),
        }
    }
}
