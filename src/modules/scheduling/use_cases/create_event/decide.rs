// Pure decision for scheduling a new event.
//
// Rules
// - The name must contain something other than whitespace.
// - The time phrase must be understood, and must not describe an instant before now.

use crate::modules::scheduling::core::time_phrase::parse_time_phrase;
use crate::modules::scheduling::use_cases::create_event::command::CreateEvent;
use crate::modules::scheduling::use_cases::errors::ValidationError;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedEvent {
    pub name: String,
    pub time: DateTime<Utc>,
}

pub fn decide_create(
    command: CreateEvent,
    now: DateTime<Utc>,
) -> Result<AcceptedEvent, ValidationError> {
    let name = command.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let time = parse_time_phrase(&command.time_phrase, now)
        .ok_or_else(|| ValidationError::UnparsableTime(command.time_phrase.trim().to_string()))?;
    if time < now {
        return Err(ValidationError::InThePast);
    }
    Ok(AcceptedEvent {
        name: name.to_string(),
        time,
    })
}
