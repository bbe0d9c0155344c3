//! Layout pipeline for calendar views.
//!
//! Transforms a flat list of events plus a view description into render-ready
//! output. Week views run the full pipeline: filter to the visible window,
//! bucket by day, group overlapping events into clusters, pack each cluster
//! into lanes, then compute pixel geometry along the time axis. Month views
//! stop after bucketing and report ordered event ids per day.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::ScheduleError;
use crate::models::event::Event;
use crate::models::view::ViewState;

pub mod buckets;
pub mod cluster;
pub mod filter;
pub mod geometry;
pub mod lanes;

pub use self::buckets::{bucket_by_day, bucket_for_day};
pub use self::cluster::{cluster_events, OverlapCluster};
pub use self::filter::filter_events;
pub use self::geometry::{compute_geometry, AxisConfig, EventGeometry};
pub use self::lanes::{assign_lanes, LaneAssignment};

/// Render-ready week view: per-event geometry plus the day-by-day listing.
///
/// `days` holds every day of the window, empty days included, with event ids
/// ordered by start time and id. `errors` carries events that were dropped
/// from the layout, so a partial result is still usable.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WeekLayout {
    pub geometry: BTreeMap<String, EventGeometry>,
    pub days: BTreeMap<NaiveDate, Vec<String>>,
    pub errors: Vec<ScheduleError>,
}

/// Render-ready month view: ordered event ids for every day of the window.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MonthLayout {
    pub days: BTreeMap<NaiveDate, Vec<String>>,
    pub errors: Vec<ScheduleError>,
}

/// Validate events, keeping the good ones and collecting errors for the rest.
pub fn split_valid<'a>(events: Vec<&'a Event>) -> (Vec<&'a Event>, Vec<ScheduleError>) {
    let mut valid = Vec::with_capacity(events.len());
    let mut errors = Vec::new();
    for event in events {
        match event.validate() {
            Ok(()) => valid.push(event),
            Err(err) => {
                log::warn!("skipping event {:?}: {}", event.id, err);
                errors.push(err);
            }
        }
    }
    (valid, errors)
}

/// Compute the week view layout for the given events and view state.
///
/// An empty window yields an empty layout rather than an error. Events that
/// fail validation are reported in `errors` and excluded from the geometry.
pub fn week_layout(events: &[Event], view: &ViewState, axis: &AxisConfig) -> WeekLayout {
    if view.window.is_empty() {
        return WeekLayout::default();
    }

    let visible = filter_events(events, view);
    log::debug!(
        "week layout: {} of {} events visible between {} and {}",
        visible.len(),
        events.len(),
        view.window.start,
        view.window.end
    );
    let (valid, errors) = split_valid(visible);

    let mut geometry = BTreeMap::new();
    let mut days = BTreeMap::new();
    for (day, bucket) in bucket_by_day(&valid, &view.window) {
        let ids: Vec<String> = bucket.iter().map(|event| event.id.clone()).collect();
        for cluster in cluster_events(&bucket) {
            for placed in assign_lanes(&cluster) {
                geometry.insert(
                    placed.event.id.clone(),
                    compute_geometry(placed.event, placed.lane_index, placed.lane_count, axis),
                );
            }
        }
        days.insert(day, ids);
    }

    WeekLayout {
        geometry,
        days,
        errors,
    }
}

/// Compute the month view layout for the given events and view state.
///
/// Month cells only list which events fall on each day, so no lane packing
/// or pixel math is involved.
pub fn month_layout(events: &[Event], view: &ViewState) -> MonthLayout {
    if view.window.is_empty() {
        return MonthLayout::default();
    }

    let visible = filter_events(events, view);
    log::debug!(
        "month layout: {} of {} events visible between {} and {}",
        visible.len(),
        events.len(),
        view.window.start,
        view.window.end
    );
    let (valid, errors) = split_valid(visible);

    let days = bucket_by_day(&valid, &view.window)
        .into_iter()
        .map(|(day, bucket)| {
            let ids: Vec<String> = bucket.iter().map(|event| event.id.clone()).collect();
            (day, ids)
        })
        .collect();

    MonthLayout { days, errors }
}
