// Time interval model
// Half-open within-day time ranges in minutes since midnight

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Minutes in a full day; the largest permitted interval end.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time range `[start, end)` within one day, in minutes since midnight.
///
/// Half-open: includes start, excludes end. Two intervals that merely touch
/// at an endpoint do not overlap. Construction enforces
/// `0 <= start < end <= 1440`, so an existing interval is always valid;
/// deserialization runs the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct TimeInterval {
    start: u32,
    end: u32,
}

impl TimeInterval {
    /// Creates an interval from raw minutes since midnight.
    ///
    /// Fails with `InvalidInterval` when `start >= end` or `end` exceeds the
    /// day. The `id` is carried into the error for reporting only.
    pub fn from_minutes(id: &str, start: u32, end: u32) -> Result<Self, ScheduleError> {
        if start >= end || end > MINUTES_PER_DAY {
            return Err(ScheduleError::InvalidInterval {
                id: id.to_string(),
                start_minutes: start,
                end_minutes: end,
            });
        }
        Ok(Self { start, end })
    }

    /// Creates an interval from clock times, truncated to whole minutes.
    pub fn from_times(id: &str, start: NaiveTime, end: NaiveTime) -> Result<Self, ScheduleError> {
        Self::from_minutes(
            id,
            start.num_seconds_from_midnight() / 60,
            end.num_seconds_from_midnight() / 60,
        )
    }

    /// Interval start (minutes since midnight, inclusive).
    #[inline]
    pub fn start_minutes(&self) -> u32 {
        self.start
    }

    /// Interval end (minutes since midnight, exclusive).
    #[inline]
    pub fn end_minutes(&self) -> u32 {
        self.end
    }

    /// Duration of this interval in minutes. Always positive.
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.end - self.start
    }

    /// Whether two intervals overlap.
    ///
    /// Open-interval semantics: `09:00-10:00` and `10:00-11:00` share an
    /// endpoint but do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Unvalidated wire form of [`TimeInterval`].
#[derive(Deserialize)]
struct RawInterval {
    start: u32,
    end: u32,
}

impl TryFrom<RawInterval> for TimeInterval {
    type Error = ScheduleError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Self::from_minutes("", raw.start, raw.end)
    }
}
