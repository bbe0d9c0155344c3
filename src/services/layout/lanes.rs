use super::cluster::{chronological, OverlapCluster};
use crate::models::event::Event;

/// One event's lane placement within its overlap cluster.
#[derive(Debug, Clone)]
pub struct LaneAssignment<'a> {
    pub event: &'a Event,
    /// Zero-based lane index.
    pub lane_index: usize,
    /// Total lanes opened for the cluster; the same value appears on every
    /// assignment from one cluster.
    pub lane_count: usize,
}

/// Assign every event in the cluster to a lane such that no two events
/// sharing a lane overlap in time.
///
/// Greedy interval partitioning: events are processed in (start, end, id)
/// order and placed in the first lane whose previous occupant has ended; a
/// lane end at or before the event's start counts as free, so back-to-back
/// events share a lane. When no lane is free a new one opens. First-free
/// placement uses the minimum possible number of lanes, which equals the
/// largest set of mutually overlapping events in the cluster.
pub fn assign_lanes<'a>(cluster: &OverlapCluster<'a>) -> Vec<LaneAssignment<'a>> {
    let mut ordered = cluster.events.clone();
    ordered.sort_by(|a, b| chronological(a, b));

    let mut lane_ends: Vec<u32> = Vec::new();
    let mut placements: Vec<(&Event, usize)> = Vec::with_capacity(ordered.len());

    for event in ordered {
        let free = lane_ends
            .iter()
            .position(|&end| end <= event.start_minutes());
        let index = match free {
            Some(index) => {
                lane_ends[index] = event.end_minutes();
                index
            }
            None => {
                lane_ends.push(event.end_minutes());
                lane_ends.len() - 1
            }
        };
        placements.push((event, index));
    }

    let lane_count = lane_ends.len();
    placements
        .into_iter()
        .map(|(event, lane_index)| LaneAssignment {
            event,
            lane_index,
            lane_count,
        })
        .collect()
}
