use crate::modules::scheduling::adapters::outbound::event_store::EventStore;
use crate::modules::scheduling::core::event::ScheduledEvent;
use crate::modules::scheduling::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::PartitionKey;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

pub struct ListEventsHandler<TRecords>
where
    TRecords: RecordStore<ScheduledEvent> + 'static,
{
    store: Arc<EventStore<TRecords>>,
}

impl<TRecords> ListEventsHandler<TRecords>
where
    TRecords: RecordStore<ScheduledEvent> + 'static,
{
    pub fn new(store: Arc<EventStore<TRecords>>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, partition: &PartitionKey) -> Result<String, ApplicationError> {
        Ok(self.store.list(partition).await?)
    }
}
