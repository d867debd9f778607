// Small value types shared by every module.
//
// Responsibilities
// - Name the storage scope of a chat channel (PartitionKey).
// - Abstract the current instant so expiry and "in the past" checks can be tested (Clock).

use chrono::{DateTime, Utc};
use std::fmt;

/// Storage scope of one chat channel: every (server, channel) pair owns its own id namespace
/// and its own durable record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartitionKey {
    pub server: String,
    pub channel: String,
}

impl PartitionKey {
    pub fn new(server: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            channel: channel.into(),
        }
    }
}

impl fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.server, self.channel)
    }
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
