//! Summary statistics for the calendar sidebar and dashboard.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::event::{Event, EventStatus};

/// How many upcoming appointments the sidebar shows.
pub const DEFAULT_UPCOMING_LIMIT: usize = 5;

/// How many reps the dashboard's top-performer list shows.
pub const DEFAULT_PERFORMER_LIMIT: usize = 5;

/// Status breakdown across a set of events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EventStats {
    pub total: usize,
    pub scheduled: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl EventStats {
    /// Count events by status.
    pub fn tally(events: &[Event]) -> Self {
        let mut stats = Self::default();
        for event in events {
            stats.add(event.status);
        }
        stats
    }

    /// Completed share of all counted events, `0.0` when there are none.
    pub fn completion_rate(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f32 / self.total as f32
    }

    fn add(&mut self, status: EventStatus) {
        self.total += 1;
        match status {
            EventStatus::Scheduled => self.scheduled += 1,
            EventStatus::Completed => self.completed += 1,
            EventStatus::Cancelled => self.cancelled += 1,
        }
    }
}

/// Status breakdown per sales representative, keyed by resource id.
///
/// Only reps appearing in the event collection show up; the full rep roster
/// lives with the external collaborator.
pub fn stats_by_resource(events: &[Event]) -> BTreeMap<String, EventStats> {
    let mut stats: BTreeMap<String, EventStats> = BTreeMap::new();
    for event in events {
        stats
            .entry(event.resource_id.clone())
            .or_default()
            .add(event.status);
    }
    stats
}

/// Reps ranked by completion rate, best first, capped at `limit`.
///
/// Ties are broken by resource id so the ranking is stable across runs.
pub fn top_performers(events: &[Event], limit: usize) -> Vec<(String, EventStats)> {
    let mut ranked: Vec<(String, EventStats)> = stats_by_resource(events).into_iter().collect();
    ranked.sort_by(|a, b| {
        b.1.completion_rate()
            .total_cmp(&a.1.completion_rate())
            .then_with(|| a.0.cmp(&b.0))
    });
    ranked.truncate(limit);
    ranked
}

/// The next scheduled appointments on or after `today`.
///
/// Results are ordered by day, start time, then id, and capped at `limit`.
/// Completed and cancelled appointments never show up here.
pub fn upcoming_events<'a>(events: &'a [Event], today: NaiveDate, limit: usize) -> Vec<&'a Event> {
    let mut upcoming: Vec<&Event> = events
        .iter()
        .filter(|event| event.day >= today && event.status == EventStatus::Scheduled)
        .collect();
    upcoming.sort_by(|a, b| {
        a.day
            .cmp(&b.day)
            .then_with(|| a.interval.cmp(&b.interval))
            .then_with(|| a.id.cmp(&b.id))
    });
    upcoming.truncate(limit);
    upcoming
}
