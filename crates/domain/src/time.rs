//! Wall-clock time helpers.
//!
//! Schedules are wall-clock concepts (08:00 means 08:00 on the clock on the
//! wall), so the whole crate works in naive local time rather than UTC.

use chrono::{Local, NaiveDateTime, Timelike};

/// Naive local timestamp used for fire times and "now" inputs.
pub type LocalTimestamp = NaiveDateTime;

/// Return the current local wall-clock time.
#[must_use]
pub fn now_local() -> LocalTimestamp {
    Local::now().naive_local()
}

/// Drop seconds and sub-second precision; schedules are minute-granular.
#[must_use]
pub fn truncate_to_minute(ts: LocalTimestamp) -> LocalTimestamp {
    ts.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(ts)
}
