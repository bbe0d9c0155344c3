use serde::{Deserialize, Serialize};

use crate::models::event::Event;

/// Vertical scale of the time axis: 48 px per hour.
pub const PIXELS_PER_MINUTE: f32 = 0.8;

/// Height floor so very short appointments stay visible and clickable.
pub const MIN_EVENT_HEIGHT: f32 = 20.0;

/// Share of a day column events may occupy. The remainder keeps lane and
/// day boundaries visually distinguishable.
pub const USABLE_WIDTH_FRACTION: f32 = 0.9;

/// Time axis configuration for geometry computation.
///
/// The axis origin is midnight (minutes-since-midnight zero maps to the top
/// of the column).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub pixels_per_minute: f32,
    pub minimum_height: f32,
    pub usable_width_fraction: f32,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            pixels_per_minute: PIXELS_PER_MINUTE,
            minimum_height: MIN_EVENT_HEIGHT,
            usable_width_fraction: USABLE_WIDTH_FRACTION,
        }
    }
}

/// On-screen placement of one event within its day column.
///
/// `top` and `height` are pixels along the time axis; `width_fraction` and
/// `left_fraction` are fractions of the column width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventGeometry {
    pub top: f32,
    pub height: f32,
    pub width_fraction: f32,
    pub left_fraction: f32,
    pub lane_index: usize,
    pub lane_count: usize,
}

/// Compute the geometry for one event given its lane placement.
///
/// Pure arithmetic: identical inputs always produce identical geometry.
pub fn compute_geometry(
    event: &Event,
    lane_index: usize,
    lane_count: usize,
    axis: &AxisConfig,
) -> EventGeometry {
    let lane_count = lane_count.max(1);
    let top = event.start_minutes() as f32 * axis.pixels_per_minute;
    let height =
        (event.duration_minutes() as f32 * axis.pixels_per_minute).max(axis.minimum_height);
    let width_fraction = axis.usable_width_fraction / lane_count as f32;
    let left_fraction = width_fraction * lane_index as f32;

    EventGeometry {
        top,
        height,
        width_fraction,
        left_fraction,
        lane_index,
        lane_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn event(start: (u32, u32), end: (u32, u32)) -> Event {
        Event::new(
            "evt-1",
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            "rep-1",
        )
        .unwrap()
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_top_scales_with_start_time() {
        let geo = compute_geometry(&event((9, 0), (10, 0)), 0, 1, &AxisConfig::default());
        // 540 minutes at 0.8 px/min
        assert_close(geo.top, 432.0);
    }

    #[test]
    fn test_height_scales_with_duration() {
        let geo = compute_geometry(&event((9, 0), (10, 30)), 0, 1, &AxisConfig::default());
        assert_close(geo.height, 72.0);
    }

    #[test]
    fn test_height_floor_applies_to_short_events() {
        // 15 minutes would be 12 px, below the floor
        let geo = compute_geometry(&event((9, 0), (9, 15)), 0, 1, &AxisConfig::default());
        assert_close(geo.height, MIN_EVENT_HEIGHT);
    }

    #[test]
    fn test_width_divides_usable_fraction_by_lane_count() {
        let geo = compute_geometry(&event((9, 0), (10, 0)), 0, 3, &AxisConfig::default());
        assert_close(geo.width_fraction, 0.3);
        assert_close(geo.left_fraction, 0.0);
    }

    #[test]
    fn test_left_offset_follows_lane_index() {
        let geo = compute_geometry(&event((9, 0), (10, 0)), 2, 3, &AxisConfig::default());
        assert_close(geo.left_fraction, 0.6);
        assert_eq!(geo.lane_index, 2);
        assert_eq!(geo.lane_count, 3);
    }

    #[test]
    fn test_single_lane_takes_full_usable_width() {
        let geo = compute_geometry(&event((9, 0), (10, 0)), 0, 1, &AxisConfig::default());
        assert_close(geo.width_fraction, USABLE_WIDTH_FRACTION);
    }

    #[test]
    fn test_custom_axis_config() {
        let axis = AxisConfig {
            pixels_per_minute: 2.0,
            minimum_height: 10.0,
            usable_width_fraction: 1.0,
        };
        let geo = compute_geometry(&event((1, 0), (1, 30)), 1, 2, &axis);
        assert_close(geo.top, 120.0);
        assert_close(geo.height, 60.0);
        assert_close(geo.width_fraction, 0.5);
        assert_close(geo.left_fraction, 0.5);
    }

    #[test]
    fn test_top_recovers_start_minutes() {
        let axis = AxisConfig::default();
        let geo = compute_geometry(&event((13, 37), (14, 0)), 0, 1, &axis);
        let recovered = (geo.top / axis.pixels_per_minute).round() as u32;
        assert_eq!(recovered, 13 * 60 + 37);
    }

    #[test]
    fn test_identical_inputs_identical_geometry() {
        let e = event((9, 0), (10, 0));
        let axis = AxisConfig::default();
        assert_eq!(
            compute_geometry(&e, 1, 2, &axis),
            compute_geometry(&e, 1, 2, &axis)
        );
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let geo = compute_geometry(&event((9, 0), (10, 0)), 0, 2, &AxisConfig::default());
        let json = serde_json::to_value(geo).unwrap();
        assert!(json.get("widthFraction").is_some());
        assert!(json.get("leftFraction").is_some());
        assert!(json.get("laneIndex").is_some());
        assert!(json.get("laneCount").is_some());
    }
}
