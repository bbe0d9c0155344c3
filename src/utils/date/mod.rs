// Date utility functions
// Window construction, period navigation, and display formatting

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::models::event::Event;
use crate::models::view::{CalendarView, DateWindow};

/// Calculate the week containing the given date.
///
/// Weeks run Sunday through Saturday.
pub fn week_window(date: NaiveDate) -> DateWindow {
    let offset = date.weekday().num_days_from_sunday() as i64;
    let start = date - Duration::days(offset);
    DateWindow::new(start, start + Duration::days(6))
}

/// Calculate the calendar month containing the given date.
pub fn month_window(date: NaiveDate) -> DateWindow {
    let first = date.with_day(1).unwrap();
    let last = first
        .checked_add_months(Months::new(1))
        .unwrap()
        .pred_opt()
        .unwrap();
    DateWindow::new(first, last)
}

/// Calculate the month grid for the given date: the month widened to whole
/// weeks, so the first row starts on Sunday and the last ends on Saturday.
///
/// This is the day range a month view actually displays.
pub fn month_grid_window(date: NaiveDate) -> DateWindow {
    let month = month_window(date);
    DateWindow::new(week_window(month.start).start, week_window(month.end).end)
}

/// Step a focus date forward by one period of the given view granularity.
pub fn next_period(view: CalendarView, date: NaiveDate) -> NaiveDate {
    match view {
        CalendarView::Week => date + Duration::days(7),
        CalendarView::Month => date.checked_add_months(Months::new(1)).unwrap(),
    }
}

/// Step a focus date backward by one period of the given view granularity.
pub fn previous_period(view: CalendarView, date: NaiveDate) -> NaiveDate {
    match view {
        CalendarView::Week => date - Duration::days(7),
        CalendarView::Month => date.checked_sub_months(Months::new(1)).unwrap(),
    }
}

/// The span from the earliest to the latest event day, or `None` when the
/// collection is empty. Used to bound date pickers.
pub fn event_date_span(events: &[Event]) -> Option<DateWindow> {
    let first = events.iter().map(|e| e.day).min()?;
    let last = events.iter().map(|e| e.day).max()?;
    Some(DateWindow::new(first, last))
}

/// Format a date for display, e.g. "March 10, 2025".
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Format minutes since midnight as a 12-hour clock time, e.g. "9:30 AM".
///
/// 1440 (end of day) wraps to "12:00 AM".
pub fn format_display_time(minutes: u32) -> String {
    let hour24 = (minutes / 60) % 24;
    let minute = minutes % 60;
    let (hour12, meridiem) = match hour24 {
        0 => (12, "AM"),
        1..=11 => (hour24, "AM"),
        12 => (12, "PM"),
        _ => (hour24 - 12, "PM"),
    };
    format!("{}:{:02} {}", hour12, minute, meridiem)
}

/// Format a date as an ISO day string, e.g. "2025-03-10".
pub fn to_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
