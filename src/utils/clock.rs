//! Clock seam. `SystemClock` is the only place in the crate that reads the
//! system time; everything else receives "now" as a plain value.

use crate::utils::date::Instant;
use chrono::Local;

pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Local::now()
    }
}

/// A clock frozen at a given instant (tests, `--at` overrides).
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Instant);

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.0
    }
}
