use crate::modules::scheduling::adapters::outbound::event_store::EventStore;
use crate::modules::scheduling::core::event::ScheduledEvent;
use crate::modules::scheduling::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::PartitionKey;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

pub struct ShowResponsesHandler<TRecords>
where
    TRecords: RecordStore<ScheduledEvent> + 'static,
{
    store: Arc<EventStore<TRecords>>,
}

impl<TRecords> ShowResponsesHandler<TRecords>
where
    TRecords: RecordStore<ScheduledEvent> + 'static,
{
    pub fn new(store: Arc<EventStore<TRecords>>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        partition: &PartitionKey,
        event_id: &str,
    ) -> Result<String, ApplicationError> {
        let event = self
            .store
            .retrieve(partition, event_id)
            .await
            .ok_or_else(|| ApplicationError::NotFound(event_id.to_string()))?;
        tracing::debug!(partition = %partition, id = event_id, "responses requested");
        Ok(event.render_responses())
    }
}
