//! Schedule — ordered time-of-day → target-position rules.
//!
//! Entries keep insertion order; removal is by positional index and an
//! out-of-bounds index is a silent no-op. [`next_occurrence`] is the one
//! genuine algorithm in the system: the next wall-clock instant a rule
//! should fire, strictly after "now".

use std::fmt;

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{ShutterPlanError, ValidationError};
use crate::time::LocalTimestamp;

/// One `(time-of-day, target-position)` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Wall-clock time of day, minute granularity (seconds are zeroed).
    pub time: NaiveTime,
    /// Target position in percent, 0 = closed, 100 = open.
    pub position: u8,
}

impl ScheduleEntry {
    /// Create an entry, normalising `time` to minute granularity.
    ///
    /// # Errors
    ///
    /// Returns [`ShutterPlanError::Validation`] when `position` exceeds 100.
    pub fn new(time: NaiveTime, position: u8) -> Result<Self, ShutterPlanError> {
        let entry = Self {
            time: time
                .with_second(0)
                .and_then(|t| t.with_nanosecond(0))
                .unwrap_or(time),
            position,
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ShutterPlanError::Validation`] when `position` exceeds 100
    /// ([`ValidationError::PositionOutOfRange`]).
    pub fn validate(&self) -> Result<(), ShutterPlanError> {
        if self.position > 100 {
            return Err(ValidationError::PositionOutOfRange(self.position).into());
        }
        Ok(())
    }

    /// The next instant this entry should fire, strictly after `now`.
    #[must_use]
    pub fn next_occurrence(&self, now: LocalTimestamp) -> LocalTimestamp {
        next_occurrence(self.time, now)
    }

    /// Whether this entry's time matches the `(hour, minute)` of `at`.
    #[must_use]
    pub fn matches_minute(&self, at: LocalTimestamp) -> bool {
        self.time.hour() == at.hour() && self.time.minute() == at.minute()
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}%", self.time.format("%H:%M"), self.position)
    }
}

/// Compute the next occurrence of `time` strictly after `now`.
///
/// Today's date at `time`; when that instant is equal to or before `now`,
/// roll forward exactly one calendar day. A fire landing exactly on the
/// boundary second is therefore pushed to tomorrow rather than firing
/// immediately — acceptable drift for a minute-granularity feature.
#[must_use]
pub fn next_occurrence(time: NaiveTime, now: LocalTimestamp) -> LocalTimestamp {
    let today = now.date().and_time(time);
    if today > now {
        today
    } else {
        today + Duration::days(1)
    }
}

/// Ordered sequence of [`ScheduleEntry`] rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Create an empty schedule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, preserving insertion order.
    pub fn push(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Remove the entry at `index`.
    ///
    /// Out-of-bounds indices are ignored and return `None`; indices are
    /// positional against the current list, so any prior removal shifts them.
    pub fn remove(&mut self, index: usize) -> Option<ScheduleEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// The first entry whose `(hour, minute)` matches `at`, in insertion order.
    #[must_use]
    pub fn first_match(&self, at: LocalTimestamp) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|entry| entry.matches_minute(at))
    }

    /// Borrow the entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check domain invariants of every entry.
    ///
    /// # Errors
    ///
    /// Returns the first entry's [`ShutterPlanError::Validation`] failure.
    pub fn validate(&self) -> Result<(), ShutterPlanError> {
        for entry in &self.entries {
            entry.validate()?;
        }
        Ok(())
    }

    /// Render the schedule as one `- {time} -> {position}%` line per entry.
    #[must_use]
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("- {entry}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<Vec<ScheduleEntry>> for Schedule {
    fn from(entries: Vec<ScheduleEntry>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduleEntry;
    type IntoIter = std::slice::Iter<'a, ScheduleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
