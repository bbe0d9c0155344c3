// Event module
// Sales appointment model: one client/rep meeting on one calendar day

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::interval::TimeInterval;

/// Lifecycle status of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        };
        write!(f, "{s}")
    }
}

impl FromStr for EventStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

/// Error type for unrecognized status strings.
#[derive(Debug, Clone)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown event status: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

/// A scheduled appointment between a client and a sales representative.
///
/// Events are read-only inputs to the layout engine. `title` and
/// `client_name` are opaque display fields the engine never inspects.
/// The time range lives in a validated [`TimeInterval`], so an event that
/// exists always satisfies `start < end` within one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub client_name: String,
    pub day: NaiveDate,
    pub interval: TimeInterval,
    pub resource_id: String,
    pub status: EventStatus,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Arguments
    /// * `id` - Unique event identifier (required, non-empty)
    /// * `day` - Calendar day the appointment falls on
    /// * `start` - Start time of day
    /// * `end` - End time of day (must be after `start`)
    /// * `resource_id` - Assigned sales representative (required, non-empty)
    ///
    /// # Examples
    /// ```
    /// use sales_calendar::models::event::Event;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    /// let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    /// let end = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
    /// let event = Event::new("evt-1", day, start, end, "rep-1").unwrap();
    /// ```
    pub fn new(
        id: impl Into<String>,
        day: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        resource_id: impl Into<String>,
    ) -> Result<Self, ScheduleError> {
        let id = id.into();
        let resource_id = resource_id.into();

        let interval = TimeInterval::from_times(&id, start, end)?;

        let event = Self {
            id,
            title: String::new(),
            client_name: String::new(),
            day,
            interval,
            resource_id,
            status: EventStatus::Scheduled,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event's required identity fields.
    ///
    /// The interval is valid by construction; this checks id and resource.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.id.trim().is_empty() {
            return Err(ScheduleError::InvalidEvent {
                id: self.id.clone(),
                reason: "missing event id".to_string(),
            });
        }
        if self.resource_id.trim().is_empty() {
            return Err(ScheduleError::InvalidEvent {
                id: self.id.clone(),
                reason: "missing resource id".to_string(),
            });
        }
        Ok(())
    }

    /// Start of the appointment in minutes since midnight.
    #[inline]
    pub fn start_minutes(&self) -> u32 {
        self.interval.start_minutes()
    }

    /// End of the appointment in minutes since midnight.
    #[inline]
    pub fn end_minutes(&self) -> u32 {
        self.interval.end_minutes()
    }

    /// Appointment length in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.interval.duration_minutes()
    }

    /// Whether this appointment conflicts with another in time.
    ///
    /// True only when both fall on the same day and their intervals overlap
    /// (open-interval semantics; back-to-back appointments do not conflict).
    pub fn overlaps(&self, other: &Event) -> bool {
        self.day == other.day && self.interval.overlaps(&other.interval)
    }
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    id: Option<String>,
    title: Option<String>,
    client_name: Option<String>,
    day: Option<NaiveDate>,
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
    resource_id: Option<String>,
    status: EventStatus,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            client_name: None,
            day: None,
            start: None,
            end: None,
            resource_id: None,
            status: EventStatus::Scheduled,
        }
    }

    /// Set the event id
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the display title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the client display name
    pub fn client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = Some(client_name.into());
        self
    }

    /// Set the calendar day
    pub fn day(mut self, day: NaiveDate) -> Self {
        self.day = Some(day);
        self
    }

    /// Set the start time
    pub fn start(mut self, start: NaiveTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end time
    pub fn end(mut self, end: NaiveTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the assigned sales representative
    pub fn resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Set the appointment status
    pub fn status(mut self, status: EventStatus) -> Self {
        self.status = status;
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, ScheduleError> {
        let id = self.id.unwrap_or_default();
        let missing = |reason: &str| ScheduleError::InvalidEvent {
            id: id.clone(),
            reason: reason.to_string(),
        };

        let day = self.day.ok_or_else(|| missing("missing day"))?;
        let start = self.start.ok_or_else(|| missing("missing start time"))?;
        let end = self.end.ok_or_else(|| missing("missing end time"))?;
        let resource_id = self
            .resource_id
            .ok_or_else(|| missing("missing resource id"))?;

        let interval = TimeInterval::from_times(&id, start, end)?;

        let event = Event {
            id,
            title: self.title.unwrap_or_default(),
            client_name: self.client_name.unwrap_or_default(),
            day,
            interval,
            resource_id,
            status: self.status,
        };
        event.validate()?;
        Ok(event)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
