// View model
// Date windows and view state supplied by the controller layer

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar view granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarView {
    Week,
    Month,
}

/// An inclusive range of calendar days.
///
/// A window with `end < start` is empty. Empty windows are valid view state
/// (an empty schedule is a normal outcome) and simply contain no days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Creates a window spanning `start` through `end`, both inclusive.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether a day falls within this window.
    #[inline]
    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }

    /// True when the window holds no days (`end < start`).
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Iterates every day in the window in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

/// View configuration for one layout computation.
///
/// Mirrors what the controller layer supplies: the visible date window and
/// the set of selected sales representatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub window: DateWindow,
    /// Resource allow-set. An empty set means every resource is shown.
    pub selected_resources: BTreeSet<String>,
}

impl ViewState {
    /// View state showing all resources within `window`.
    pub fn new(window: DateWindow) -> Self {
        Self {
            window,
            selected_resources: BTreeSet::new(),
        }
    }

    /// Restrict the view to the given resources.
    pub fn with_resources<I, S>(mut self, resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_resources = resources.into_iter().map(Into::into).collect();
        self
    }

    /// Whether events for `resource_id` pass the resource filter.
    pub fn shows_resource(&self, resource_id: &str) -> bool {
        self.selected_resources.is_empty() || self.selected_resources.contains(resource_id)
    }
}
