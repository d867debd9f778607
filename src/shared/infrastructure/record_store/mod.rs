// Port for durable partition records.
//
// Purpose
// - Persist the full, ordered list of records belonging to one partition as a single unit.
//
// Boundaries
// - No locking here. Callers serialize read-modify-write cycles per partition.
// - A missing record is not an error: it loads as an empty list.

use crate::shared::core::primitives::PartitionKey;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordStoreError {
    #[error("corrupt record for {partition}: {reason}")]
    Corrupt { partition: String, reason: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait RecordStore<Record>: Send + Sync
where
    Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    async fn load(&self, partition: &PartitionKey) -> Result<Vec<Record>, RecordStoreError>;
    async fn save(&self, partition: &PartitionKey, records: &[Record])
    -> Result<(), RecordStoreError>;
}

pub mod file_system;
pub mod in_memory;
