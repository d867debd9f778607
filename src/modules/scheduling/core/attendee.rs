use serde::{Deserialize, Serialize};

/// A participant who responded to an event. The name is a snapshot taken at response time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attendee {
    pub id: String,
    pub name: String,
}

impl Attendee {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
