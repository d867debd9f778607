use crate::modules::scheduling::adapters::outbound::event_store::EventStore;
use crate::modules::scheduling::core::event::ScheduledEvent;
use crate::modules::scheduling::use_cases::create_event::command::CreateEvent;
use crate::modules::scheduling::use_cases::create_event::decide::decide_create;
use crate::modules::scheduling::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::PartitionKey;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

pub struct CreateEventHandler<TRecords>
where
    TRecords: RecordStore<ScheduledEvent> + 'static,
{
    store: Arc<EventStore<TRecords>>,
}

impl<TRecords> CreateEventHandler<TRecords>
where
    TRecords: RecordStore<ScheduledEvent> + 'static,
{
    pub fn new(store: Arc<EventStore<TRecords>>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        partition: &PartitionKey,
        command: CreateEvent,
    ) -> Result<ScheduledEvent, ApplicationError> {
        let accepted = decide_create(command, self.store.now())?;
        let event = self
            .store
            .create(partition, &accepted.name, accepted.time)
            .await?;
        Ok(event)
    }
}
