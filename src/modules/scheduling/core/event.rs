// A scheduled occurrence within one channel and the responses collected for it.
//
// Invariants
// - An attendee id appears in at most one of accepted, declined and maybe.
// - Each response list keeps the order in which people responded.

use crate::modules::scheduling::core::attendee::Attendee;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Accepted,
    Declined,
    Maybe,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub id: String,
    pub name: String,
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub accepted: Vec<Attendee>,
    #[serde(default)]
    pub declined: Vec<Attendee>,
    #[serde(default)]
    pub maybe: Vec<Attendee>,
}

impl ScheduledEvent {
    pub fn new(id: impl Into<String>, name: impl Into<String>, time: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            time,
            accepted: Vec::new(),
            declined: Vec::new(),
            maybe: Vec::new(),
        }
    }

    pub fn accept(&mut self, attendee: Attendee) {
        self.respond(attendee, Response::Accepted);
    }

    pub fn decline(&mut self, attendee: Attendee) {
        self.respond(attendee, Response::Declined);
    }

    pub fn maybe(&mut self, attendee: Attendee) {
        self.respond(attendee, Response::Maybe);
    }

    /// Moves the attendee into the list for `response`, dropping any earlier answer.
    pub fn respond(&mut self, attendee: Attendee, response: Response) {
        self.forget(&attendee.id);
        match response {
            Response::Accepted => self.accepted.push(attendee),
            Response::Declined => self.declined.push(attendee),
            Response::Maybe => self.maybe.push(attendee),
        }
    }

    pub fn response_of(&self, attendee_id: &str) -> Option<Response> {
        let contains = |list: &[Attendee]| list.iter().any(|a| a.id == attendee_id);
        if contains(&self.accepted) {
            Some(Response::Accepted)
        } else if contains(&self.declined) {
            Some(Response::Declined)
        } else if contains(&self.maybe) {
            Some(Response::Maybe)
        } else {
            None
        }
    }

    pub fn has_passed(&self, now: DateTime<Utc>) -> bool {
        self.time < now
    }

    pub fn render_time(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }

    pub fn render_summary(&self) -> String {
        format!("{}: {} scheduled for {}", self.id, self.name, self.render_time())
    }

    pub fn render_responses(&self) -> String {
        let names = |list: &[Attendee]| {
            list.iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!(
            "Yes: {}\nNo: {}\nMaybe: {}",
            names(&self.accepted),
            names(&self.declined),
            names(&self.maybe)
        )
    }

    fn forget(&mut self, attendee_id: &str) {
        self.accepted.retain(|a| a.id != attendee_id);
        self.declined.retain(|a| a.id != attendee_id);
        self.maybe.retain(|a| a.id != attendee_id);
    }
}
