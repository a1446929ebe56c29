//! Record timestamps.
//!
//! Every record gets a distinct time: the first record is stamped with the
//! run's start time and each following one a fixed step earlier.

use chrono::{DateTime, Duration, SecondsFormat, Utc};

/// Hands out strictly decreasing timestamps from an anchor.
#[derive(Debug, Clone)]
pub struct TimestampClock {
    current: DateTime<Utc>,
    step: Duration,
}

impl TimestampClock {
    /// Create a clock anchored at `anchor`, stepping back by `step_ms`.
    ///
    /// A zero step is raised to one millisecond so timestamps stay distinct.
    pub fn new(anchor: DateTime<Utc>, step_ms: u64) -> Self {
        let step = i64::try_from(step_ms.max(1))
            .ok()
            .and_then(Duration::try_milliseconds)
            .unwrap_or(Duration::MAX);
        Self {
            current: anchor,
            step,
        }
    }

    /// Return the current timestamp and move the clock back one step.
    pub fn tick(&mut self) -> DateTime<Utc> {
        let stamp = self.current;
        self.current = self
            .current
            .checked_sub_signed(self.step)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        stamp
    }
}

/// Format as ISO 8601 with millisecond precision and a `Z` suffix.
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}
