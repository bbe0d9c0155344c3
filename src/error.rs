// Error taxonomy for event validation and intake

use serde::Serialize;
use thiserror::Error;

/// Errors produced while validating events or converting intake records.
///
/// Validation errors are collected per record and returned alongside partial
/// results; they never abort a whole layout computation. Only `Payload`
/// (undecodable intake JSON) is fatal, since no per-record recovery exists.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ScheduleError {
    /// The event's time range does not satisfy `start < end`.
    #[error("event '{id}': invalid interval ({start_minutes}..{end_minutes}), start must precede end")]
    InvalidInterval {
        id: String,
        start_minutes: u32,
        end_minutes: u32,
    },

    /// The event is missing a required field (day, resource, id).
    #[error("event '{id}': {reason}")]
    InvalidEvent { id: String, reason: String },

    /// An intake record field could not be parsed.
    #[error("event '{id}': field '{field}' has malformed value '{value}'")]
    MalformedRecord {
        id: String,
        field: String,
        value: String,
    },

    /// The whole intake payload could not be decoded.
    #[error("undecodable event payload: {0}")]
    Payload(String),
}

impl ScheduleError {
    /// The id of the event this error refers to, if it names one.
    pub fn event_id(&self) -> Option<&str> {
        match self {
            Self::InvalidInterval { id, .. }
            | Self::InvalidEvent { id, .. }
            | Self::MalformedRecord { id, .. } => Some(id),
            Self::Payload(_) => None,
        }
    }
}
