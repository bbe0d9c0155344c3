// Sales Calendar Library
// Scheduling and layout engine for sales appointment calendars

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::ScheduleError;
pub use models::event::{Event, EventStatus};
pub use models::interval::TimeInterval;
pub use models::view::{CalendarView, DateWindow, ViewState};
pub use services::layout::{
    month_layout, week_layout, AxisConfig, EventGeometry, MonthLayout, WeekLayout,
};
