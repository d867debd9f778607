// Channel-scoped event store on top of a RecordStore.
//
// Responsibilities
// - Serialize every read-modify-write cycle per partition through a lock table.
// - Assign the smallest free integer id.
// - Sweep events whose time has passed and persist the swept partition.
// - Degrade an unreadable partition to an empty one; never hide a failed save.
//
// Sweeping
// - list, create, update and remove (delete) sweep before acting and persist the result.
// - retrieve, generate_id and store work on the partition as it is stored.

use crate::modules::scheduling::core::event::ScheduledEvent;
use crate::modules::scheduling::core::ids::smallest_free_id;
use crate::shared::core::primitives::{Clock, PartitionKey};
use crate::shared::infrastructure::record_store::{RecordStore, RecordStoreError};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

pub const NO_EVENTS: &str = "There are no events currently scheduled";

/// The lock table holds one entry per partition ever touched and is never pruned; it is
/// bounded by the channels the bot serves.
pub struct EventStore<TRecords>
where
    TRecords: RecordStore<ScheduledEvent> + 'static,
{
    records: Arc<TRecords>,
    clock: Arc<dyn Clock>,
    locks: Mutex<HashMap<PartitionKey, Arc<Mutex<()>>>>,
}

impl<TRecords> EventStore<TRecords>
where
    TRecords: RecordStore<ScheduledEvent> + 'static,
{
    pub fn new(records: Arc<TRecords>, clock: Arc<dyn Clock>) -> Self {
        Self {
            records,
            clock,
            locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Upserts `event` under its own id. A replaced event keeps its position.
    pub async fn store(
        &self,
        partition: &PartitionKey,
        event: ScheduledEvent,
    ) -> Result<(), RecordStoreError> {
        let _guard = self.lock(partition).await;
        let mut events = self.load(partition).await;
        upsert(&mut events, event);
        self.records.save(partition, &events).await
    }

    pub async fn retrieve(&self, partition: &PartitionKey, id: &str) -> Option<ScheduledEvent> {
        let _guard = self.lock(partition).await;
        self.load(partition)
            .await
            .into_iter()
            .find(|event| event.id == id)
    }

    /// Removes `id` if present. Returns whether anything was removed.
    pub async fn delete(&self, partition: &PartitionKey, id: &str) -> Result<bool, RecordStoreError> {
        Ok(self.remove(partition, id).await?.is_some())
    }

    /// Sweeps, then removes and returns the event, or `None` when no upcoming event has this id.
    pub async fn remove(
        &self,
        partition: &PartitionKey,
        id: &str,
    ) -> Result<Option<ScheduledEvent>, RecordStoreError> {
        let _guard = self.lock(partition).await;
        let mut events = self.load_swept(partition).await?;
        let Some(position) = events.iter().position(|event| event.id == id) else {
            return Ok(None);
        };
        let removed = events.remove(position);
        self.records.save(partition, &events).await?;
        tracing::info!(partition = %partition, id, "event deleted");
        Ok(Some(removed))
    }

    /// Events that have not passed yet, in insertion order. Expired ones are dropped for good.
    pub async fn upcoming(
        &self,
        partition: &PartitionKey,
    ) -> Result<Vec<ScheduledEvent>, RecordStoreError> {
        let _guard = self.lock(partition).await;
        self.load_swept(partition).await
    }

    pub async fn list(&self, partition: &PartitionKey) -> Result<String, RecordStoreError> {
        let events = self.upcoming(partition).await?;
        if events.is_empty() {
            return Ok(NO_EVENTS.to_string());
        }
        Ok(events
            .iter()
            .map(ScheduledEvent::render_summary)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    pub async fn generate_id(&self, partition: &PartitionKey) -> String {
        let _guard = self.lock(partition).await;
        smallest_free_id(&self.load(partition).await)
    }

    /// Sweeps, picks the next id and stores a new event, all under one lock.
    /// `name` is stored as given; callers reject empty names (see `decide_create`).
    pub async fn create(
        &self,
        partition: &PartitionKey,
        name: &str,
        time: DateTime<Utc>,
    ) -> Result<ScheduledEvent, RecordStoreError> {
        let _guard = self.lock(partition).await;
        let mut events = self.load_swept(partition).await?;
        let event = ScheduledEvent::new(smallest_free_id(&events), name, time);
        events.push(event.clone());
        self.records.save(partition, &events).await?;
        tracing::info!(partition = %partition, id = %event.id, name, "event created");
        Ok(event)
    }

    /// Sweeps, then applies `mutate` to the event and stores it, all under one lock.
    /// Returns `None` when no upcoming event has this id.
    pub async fn update<F>(
        &self,
        partition: &PartitionKey,
        id: &str,
        mutate: F,
    ) -> Result<Option<ScheduledEvent>, RecordStoreError>
    where
        F: FnOnce(&mut ScheduledEvent) + Send,
    {
        let _guard = self.lock(partition).await;
        let mut events = self.load_swept(partition).await?;
        let Some(event) = events.iter_mut().find(|event| event.id == id) else {
            return Ok(None);
        };
        mutate(event);
        let updated = event.clone();
        self.records.save(partition, &events).await?;
        Ok(Some(updated))
    }

    async fn lock(&self, partition: &PartitionKey) -> OwnedMutexGuard<()> {
        let lock = {
            let mut table = self.locks.lock().await;
            table.entry(partition.clone()).or_default().clone()
        };
        lock.lock_owned().await
    }

    async fn load(&self, partition: &PartitionKey) -> Vec<ScheduledEvent> {
        match self.records.load(partition).await {
            Ok(events) => {
                tracing::debug!(partition = %partition, count = events.len(), "partition loaded");
                events
            }
            Err(err) => {
                tracing::warn!(partition = %partition, error = %err, "unreadable partition, starting empty");
                Vec::new()
            }
        }
    }

    /// Loads, drops passed events and saves when anything was dropped. Caller holds the lock.
    async fn load_swept(
        &self,
        partition: &PartitionKey,
    ) -> Result<Vec<ScheduledEvent>, RecordStoreError> {
        let mut events = self.load(partition).await;
        let now = self.clock.now();
        let before = events.len();
        events.retain(|event| !event.has_passed(now));
        let swept = before - events.len();
        if swept > 0 {
            self.records.save(partition, &events).await?;
            tracing::debug!(partition = %partition, swept, "expired events removed");
        }
        Ok(events)
    }
}

fn upsert(events: &mut Vec<ScheduledEvent>, event: ScheduledEvent) {
    match events.iter_mut().find(|existing| existing.id == event.id) {
        Some(existing) => *existing = event,
        None => events.push(event),
    }
}
