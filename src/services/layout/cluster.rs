use std::cmp::Ordering;
use std::mem;

use crate::models::event::Event;

/// A maximal group of same-day events connected by interval overlap.
///
/// Connectivity is transitive: an event belongs to the cluster if it
/// overlaps any member, even when it shares no time with every member.
/// Events are held in (start, end, id) order.
#[derive(Debug, Clone)]
pub struct OverlapCluster<'a> {
    pub events: Vec<&'a Event>,
}

impl<'a> OverlapCluster<'a> {
    /// Ids of the clustered events, in cluster order.
    pub fn event_ids(&self) -> Vec<&str> {
        self.events.iter().map(|e| e.id.as_str()).collect()
    }
}

/// The processing order for one day's events: ascending start, then end,
/// then id, so equal start times resolve the same way on every run.
pub(super) fn chronological(a: &Event, b: &Event) -> Ordering {
    a.interval
        .cmp(&b.interval)
        .then_with(|| a.id.cmp(&b.id))
}

/// Partition one day's events into overlap clusters.
///
/// Single sweep over the events sorted by start: track the furthest end seen
/// in the current cluster; an event starting before that end extends the
/// cluster, anything else opens a new one. Sorting first makes the sweep
/// yield exactly the connected components of the interval overlap graph, in
/// O(n log n) dominated by the sort.
///
/// An event starting exactly at the furthest end opens a new cluster:
/// touching intervals do not overlap.
pub fn cluster_events<'a>(events: &[&'a Event]) -> Vec<OverlapCluster<'a>> {
    let mut sorted: Vec<&Event> = events.to_vec();
    sorted.sort_by(|a, b| chronological(a, b));

    let mut clusters: Vec<OverlapCluster> = Vec::new();
    let mut current: Vec<&Event> = Vec::new();
    let mut max_end = 0u32;

    for event in sorted {
        if current.is_empty() || event.start_minutes() < max_end {
            current.push(event);
            max_end = max_end.max(event.end_minutes());
        } else {
            clusters.push(OverlapCluster {
                events: mem::take(&mut current),
            });
            current.push(event);
            max_end = event.end_minutes();
        }
    }
    if !current.is_empty() {
        clusters.push(OverlapCluster { events: current });
    }
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn event(id: &str, start: (u32, u32), end: (u32, u32)) -> Event {
        Event::new(
            id,
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            "rep-1",
        )
        .unwrap()
    }

    fn cluster_ids(events: &[Event]) -> Vec<Vec<String>> {
        let refs: Vec<&Event> = events.iter().collect();
        cluster_events(&refs)
            .iter()
            .map(|c| c.event_ids().iter().map(|id| id.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_overlapping_pair_and_isolated_event() {
        let events = vec![
            event("a", (9, 0), (10, 0)),
            event("b", (9, 30), (10, 30)),
            event("c", (11, 0), (12, 0)),
        ];

        let clusters = cluster_ids(&events);
        assert_eq!(clusters, vec![vec!["a", "b"], vec!["c"]]);
    }

    #[test]
    fn test_identical_intervals_form_one_cluster() {
        let events = vec![
            event("c", (9, 0), (9, 30)),
            event("a", (9, 0), (9, 30)),
            event("b", (9, 0), (9, 30)),
        ];

        let clusters = cluster_ids(&events);
        assert_eq!(clusters, vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_touching_events_stay_separate() {
        let events = vec![event("a", (9, 0), (10, 0)), event("b", (10, 0), (11, 0))];

        let clusters = cluster_ids(&events);
        assert_eq!(clusters, vec![vec!["a"], vec!["b"]]);
    }

    #[test]
    fn test_transitive_overlap_chains_into_one_cluster() {
        // a-c never overlap directly, but b connects them
        let events = vec![
            event("a", (9, 0), (10, 0)),
            event("b", (9, 45), (11, 0)),
            event("c", (10, 30), (12, 0)),
        ];

        let clusters = cluster_ids(&events);
        assert_eq!(clusters, vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_containing_event_spans_cluster() {
        // The long event keeps the cluster open across a gap between the
        // two short ones
        let events = vec![
            event("long", (9, 0), (13, 0)),
            event("early", (9, 15), (9, 45)),
            event("late", (12, 0), (12, 30)),
        ];

        let clusters = cluster_ids(&events);
        assert_eq!(clusters, vec![vec!["long", "early", "late"]]);
    }

    #[test]
    fn test_singleton_cluster() {
        let events = vec![event("only", (9, 0), (10, 0))];

        let clusters = cluster_ids(&events);
        assert_eq!(clusters, vec![vec!["only"]]);
    }

    #[test]
    fn test_empty_input() {
        let refs: Vec<&Event> = Vec::new();
        assert!(cluster_events(&refs).is_empty());
    }

    #[test]
    fn test_partition_independent_of_input_order() {
        let events = vec![
            event("a", (9, 0), (10, 0)),
            event("b", (9, 30), (10, 30)),
            event("c", (11, 0), (12, 0)),
            event("d", (11, 30), (12, 30)),
        ];
        let reversed: Vec<Event> = events.iter().rev().cloned().collect();

        assert_eq!(cluster_ids(&events), cluster_ids(&reversed));
    }

    #[test]
    fn test_equal_starts_ordered_by_end_then_id() {
        let events = vec![
            event("b", (9, 0), (11, 0)),
            event("a", (9, 0), (11, 0)),
            event("c", (9, 0), (10, 0)),
        ];

        let clusters = cluster_ids(&events);
        // Shorter interval first, then id ties
        assert_eq!(clusters, vec![vec!["c", "a", "b"]]);
    }
}
