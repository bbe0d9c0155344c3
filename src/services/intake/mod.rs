//! Intake of raw appointment records.
//!
//! The scheduling frontend ships appointments as a JSON array of flat
//! records. Conversion is tolerant: each unusable record is reported as an
//! error and skipped, so one bad appointment never hides the rest of the
//! calendar. Only an undecodable payload fails outright.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::ScheduleError;
use crate::models::event::{Event, EventStatus};
use crate::models::interval::{TimeInterval, MINUTES_PER_DAY};

/// One appointment exactly as it arrives on the wire.
///
/// Every field is optional at this stage; [`convert`] decides what is usable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    /// Flat client name; takes precedence over the nested relation.
    pub client_name: Option<String>,
    pub client: Option<ClientRecord>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub sales_rep_id: Option<String>,
    pub status: Option<String>,
}

/// The client relation the collaborator nests on each record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClientRecord {
    pub name: Option<String>,
}

/// Decode a JSON array of records and convert it into events.
///
/// A payload that is not valid JSON, or not an array of records, is the one
/// fatal case; everything else degrades to per-record errors.
pub fn events_from_json(payload: &str) -> Result<(Vec<Event>, Vec<ScheduleError>), ScheduleError> {
    let records: Vec<EventRecord> =
        serde_json::from_str(payload).map_err(|err| ScheduleError::Payload(err.to_string()))?;
    log::debug!("decoded {} event records", records.len());
    Ok(convert(&records))
}

/// Convert wire records into validated events.
///
/// Returns the usable events in input order together with one error per
/// rejected record.
pub fn convert(records: &[EventRecord]) -> (Vec<Event>, Vec<ScheduleError>) {
    let mut events = Vec::with_capacity(records.len());
    let mut errors = Vec::new();

    for record in records {
        match convert_record(record) {
            Ok(event) => events.push(event),
            Err(err) => {
                log::warn!("rejecting record: {err}");
                errors.push(err);
            }
        }
    }

    (events, errors)
}

fn convert_record(record: &EventRecord) -> Result<Event, ScheduleError> {
    let id = record.id.clone().unwrap_or_default();
    if id.trim().is_empty() {
        return Err(ScheduleError::InvalidEvent {
            id,
            reason: "missing event id".to_string(),
        });
    }

    let malformed = |field: &str, value: &Option<String>| ScheduleError::MalformedRecord {
        id: id.clone(),
        field: field.to_string(),
        value: value.clone().unwrap_or_default(),
    };

    let day = record
        .date
        .as_deref()
        .and_then(parse_day)
        .ok_or_else(|| malformed("date", &record.date))?;
    let start = record
        .start_time
        .as_deref()
        .and_then(parse_time_minutes)
        .ok_or_else(|| malformed("startTime", &record.start_time))?;
    let end = record
        .end_time
        .as_deref()
        .and_then(parse_time_minutes)
        .ok_or_else(|| malformed("endTime", &record.end_time))?;
    let status = match record.status.as_deref() {
        Some(raw) => raw
            .parse::<EventStatus>()
            .map_err(|_| malformed("status", &record.status))?,
        None => EventStatus::default(),
    };

    let interval = TimeInterval::from_minutes(&id, start, end)?;

    let client_name = record
        .client_name
        .clone()
        .or_else(|| record.client.as_ref().and_then(|c| c.name.clone()))
        .unwrap_or_default();

    let event = Event {
        id,
        title: record.title.clone().unwrap_or_default(),
        client_name,
        day,
        interval,
        resource_id: record.sales_rep_id.clone().unwrap_or_default(),
        status,
    };
    event.validate()?;
    Ok(event)
}

/// Parse a calendar date, accepting plain dates and ISO datetimes.
///
/// Upstream storage serializes dates as full ISO timestamps, so anything
/// after a `T` separator is ignored.
fn parse_day(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    let date_part = trimmed.split_once('T').map_or(trimmed, |(date, _)| date);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Parse a wall-clock time like "09:30" into minutes since midnight.
///
/// "24:00" is accepted so an appointment may run to the end of its day.
fn parse_time_minutes(raw: &str) -> Option<u32> {
    let (hours, minutes) = raw.trim().split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    let total = hours.checked_mul(60)?.checked_add(minutes)?;
    (total <= MINUTES_PER_DAY).then_some(total)
}
