// Shared test fixtures for scheduled events.
// Compiled into the crate only during tests (cfg(test) in src/lib.rs).

use crate::modules::scheduling::core::attendee::Attendee;
use crate::modules::scheduling::core::event::ScheduledEvent;
use crate::shared::core::primitives::{FixedClock, PartitionKey};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::path::PathBuf;
use uuid::Uuid;

/// Monday 2026-10-19 12:00:00 UTC.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

pub fn fixed_clock() -> FixedClock {
    FixedClock(fixed_now())
}

pub fn partition() -> PartitionKey {
    PartitionKey::new("Bot-test", "general")
}

pub fn teddy() -> Attendee {
    Attendee::new("311083321994248192", "Teddy Test")
}

/// Unique, not yet created directory under the system temp dir.
pub fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("event_scheduler-{}", Uuid::now_v7()))
}

pub struct ScheduledEventBuilder {
    inner: ScheduledEvent,
}

impl Default for ScheduledEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ScheduledEventBuilder {
    /// Event "0", "standup", one day after `fixed_now()`, without responses.
    pub fn new() -> Self {
        Self {
            inner: ScheduledEvent::new("0", "standup", fixed_now() + Duration::days(1)),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn time(mut self, v: DateTime<Utc>) -> Self {
        self.inner.time = v;
        self
    }

    pub fn past(self) -> Self {
        self.time(fixed_now() - Duration::hours(1))
    }

    pub fn accepted(mut self, v: Attendee) -> Self {
        self.inner.accept(v);
        self
    }

    pub fn declined(mut self, v: Attendee) -> Self {
        self.inner.decline(v);
        self
    }

    pub fn maybe(mut self, v: Attendee) -> Self {
        self.inner.maybe(v);
        self
    }

    pub fn build(self) -> ScheduledEvent {
        self.inner
    }
}

#[cfg(test)]
mod scheduled_event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = ScheduledEventBuilder::default().build();
        assert_eq!(built.id, "0");
        assert_eq!(built.name, "standup");
        assert_eq!(built.time, fixed_now() + Duration::days(1));
        assert!(built.accepted.is_empty());
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let built = ScheduledEventBuilder::new()
            .id("7")
            .name("raid")
            .past()
            .accepted(teddy())
            .build();
        assert_eq!(built.id, "7");
        assert_eq!(built.name, "raid");
        assert!(built.has_passed(fixed_now()));
        assert_eq!(built.accepted, vec![teddy()]);
    }
}
