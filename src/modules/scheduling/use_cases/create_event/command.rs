/// Request to schedule `name` at the instant described by `time_phrase`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEvent {
    pub name: String,
    pub time_phrase: String,
}

impl CreateEvent {
    pub fn new(name: impl Into<String>, time_phrase: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            time_phrase: time_phrase.into(),
        }
    }
}
