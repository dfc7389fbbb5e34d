use chrono::{Local, Timelike};

use crate::models::ClockTime;

/// Source of the default timestamp for messages without a valid `[time:…]` tag.
///
/// Parsing reads the clock once per message that needs a default, so a
/// [`FixedClock`] makes a parse fully reproducible.
pub trait Clock: Send + Sync {
    fn now(&self) -> ClockTime;
}

/// Reads the local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ClockTime {
        let now = Local::now();
        // chrono guarantees hour < 24 and minute < 60
        ClockTime::new(now.hour() as u8, now.minute() as u8).unwrap_or_default()
    }
}

/// Always returns the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub ClockTime);

impl Clock for FixedClock {
    fn now(&self) -> ClockTime {
        self.0
    }
}
