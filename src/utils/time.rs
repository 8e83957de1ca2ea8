//! Time utilities: parsing HH:MM, duration strings, formatting durations.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveTime, Timelike};

/// Fallback used when a record omits its start time.
pub const START_OF_DAY: NaiveTime = NaiveTime::MIN;

/// Fallback used when a record omits its end time (23:59).
pub const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 0) {
    Some(t) => t,
    None => NaiveTime::MIN,
};

/// Strict `HH:MM` / `HH:MM:SS` parser.
pub fn parse_time_strict(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

/// Lenient parser: many records omit times, so missing or malformed input
/// yields `fallback` instead of an error. Seconds are accepted and dropped.
pub fn parse_time_only(t: Option<&str>, fallback: NaiveTime) -> NaiveTime {
    t.and_then(parse_time_strict)
        .map(|time| time.with_second(0).unwrap_or(time))
        .unwrap_or(fallback)
}

/// Like `parse_time_only`, but keeps "absent" distinguishable from a value.
pub fn parse_optional_time(t: Option<&str>) -> Option<NaiveTime> {
    t.and_then(parse_time_strict)
        .map(|time| time.with_second(0).unwrap_or(time))
}

/// Parse durations such as `60m`, `15d`, `48h`, `1h30m` or `1d 12h`.
/// A bare number is read as minutes. Negative or out-of-range values are
/// rejected.
pub fn parse_duration(s: &str) -> AppResult<Duration> {
    let invalid = || AppError::InvalidDuration(s.to_string());

    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(invalid());
    }

    if let Ok(mins) = compact.parse::<i64>() {
        if mins < 0 {
            return Err(invalid());
        }
        return Duration::try_minutes(mins).ok_or_else(invalid);
    }

    let mut total = Duration::zero();
    let mut digits = String::new();

    for c in compact.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }

        let n: i64 = digits.parse().map_err(|_| invalid())?;
        digits.clear();

        let part = match c.to_ascii_lowercase() {
            'd' => Duration::try_days(n),
            'h' => Duration::try_hours(n),
            'm' => Duration::try_minutes(n),
            _ => return Err(invalid()),
        };
        total = part
            .and_then(|p| total.checked_add(&p))
            .ok_or_else(invalid)?;
    }

    // trailing digits without a unit
    if !digits.is_empty() {
        return Err(invalid());
    }

    Ok(total)
}

/// Inverse of `parse_duration`, used when printing the configuration.
pub fn format_duration(d: Duration) -> String {
    let mins = d.num_minutes();
    if mins == 0 {
        return "0m".to_string();
    }

    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    let (days, hours, minutes) = (m / 1440, (m % 1440) / 60, m % 60);

    let mut out = String::from(sign);
    if days > 0 {
        out.push_str(&format!("{days}d"));
    }
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    out
}
