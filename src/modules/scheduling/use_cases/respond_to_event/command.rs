use crate::modules::scheduling::core::attendee::Attendee;
use crate::modules::scheduling::core::event::Response;

/// Caller's yes/no/maybe answer to one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RespondToEvent {
    pub event_id: String,
    pub attendee: Attendee,
    pub response: Response,
}
