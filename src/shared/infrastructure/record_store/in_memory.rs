// In memory implementation of the RecordStore port.
//
// Purpose
// - Support store and handler tests and local development without touching the disk.
//
// Responsibilities
// - Keep one ordered record list per partition.
// - Simulate an unavailable backend (toggle_offline) and slow I/O (set_delay_ms).

use crate::shared::core::primitives::PartitionKey;
use crate::shared::infrastructure::record_store::{RecordStore, RecordStoreError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

pub struct InMemoryRecordStore<Record> {
    inner: RwLock<HashMap<PartitionKey, Vec<Record>>>,
    delay_ms: AtomicU64,
    is_offline: bool,
}

impl<Record> Default for InMemoryRecordStore<Record> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            delay_ms: AtomicU64::new(0),
            is_offline: false,
        }
    }
}

impl<Record> InMemoryRecordStore<Record> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_ms(&self, ms: u64) {
        self.delay_ms.store(ms, Ordering::Relaxed);
    }

    async fn simulate_io(&self) -> Result<(), RecordStoreError> {
        let ms = self.delay_ms.load(Ordering::Relaxed);
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
        if self.is_offline {
            return Err(RecordStoreError::Backend("Record store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<Record> RecordStore<Record> for InMemoryRecordStore<Record>
where
    Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    async fn load(&self, partition: &PartitionKey) -> Result<Vec<Record>, RecordStoreError> {
        self.simulate_io().await?;
        let guard = self.inner.read().await;
        Ok(guard.get(partition).cloned().unwrap_or_default())
    }

    async fn save(
        &self,
        partition: &PartitionKey,
        records: &[Record],
    ) -> Result<(), RecordStoreError> {
        self.simulate_io().await?;
        let mut guard = self.inner.write().await;
        guard.insert(partition.clone(), records.to_vec());
        Ok(())
    }
}
