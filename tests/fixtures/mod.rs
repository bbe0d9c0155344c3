// Test fixtures - reusable test data
// Provides consistent test data across all test files

use chrono::{NaiveDate, NaiveTime};

use sales_calendar::models::event::{Event, EventStatus};
use sales_calendar::models::view::{DateWindow, ViewState};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, March 10, 2025
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    /// Wednesday, March 12, 2025
    pub fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
    }

    /// The Sunday-to-Saturday week containing [`monday`]
    pub fn march_week() -> DateWindow {
        DateWindow::new(
            NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
        )
    }

    /// All of March 2025
    pub fn march() -> DateWindow {
        DateWindow::new(
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
        )
    }
}

/// Sample events and views for testing
pub mod events {
    use super::*;

    /// Creates an appointment on the given day and hour range
    pub fn appointment(id: &str, day: NaiveDate, start: (u32, u32), end: (u32, u32)) -> Event {
        Event::builder()
            .id(id)
            .title(format!("Appointment {id}"))
            .client_name("Acme Corp")
            .day(day)
            .start(NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap())
            .end(NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap())
            .resource_id("rep-1")
            .build()
            .unwrap()
    }

    /// Same as [`appointment`] but assigned to a specific sales rep
    pub fn appointment_for(
        id: &str,
        day: NaiveDate,
        start: (u32, u32),
        end: (u32, u32),
        rep: &str,
    ) -> Event {
        let mut event = appointment(id, day, start, end);
        event.resource_id = rep.to_string();
        event
    }

    /// Same as [`appointment`] but with an explicit status
    pub fn appointment_with_status(
        id: &str,
        day: NaiveDate,
        start: (u32, u32),
        end: (u32, u32),
        status: EventStatus,
    ) -> Event {
        let mut event = appointment(id, day, start, end);
        event.status = status;
        event
    }

    /// A view over [`dates::march_week`] with no resource filter
    pub fn week_view() -> ViewState {
        ViewState::new(dates::march_week())
    }

    /// A view over [`dates::march`] with no resource filter
    pub fn month_view() -> ViewState {
        ViewState::new(dates::march())
    }
}
