use crate::modules::scheduling::core::event::ScheduledEvent;
use std::collections::HashSet;

/// Smallest non-negative integer, in decimal, not used as an id in `events`.
///
/// Ids that are not plain integers never block a number, so "07" does not reserve 7.
pub fn smallest_free_id(events: &[ScheduledEvent]) -> String {
    let taken: HashSet<&str> = events.iter().map(|e| e.id.as_str()).collect();
    (0u64..)
        .map(|candidate| candidate.to_string())
        .find(|candidate| !taken.contains(candidate.as_str()))
        .unwrap_or_default()
}
