use crate::modules::scheduling::adapters::outbound::event_store::EventStore;
use crate::modules::scheduling::core::event::ScheduledEvent;
use crate::modules::scheduling::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::PartitionKey;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

pub struct DeleteEventHandler<TRecords>
where
    TRecords: RecordStore<ScheduledEvent> + 'static,
{
    store: Arc<EventStore<TRecords>>,
}

impl<TRecords> DeleteEventHandler<TRecords>
where
    TRecords: RecordStore<ScheduledEvent> + 'static,
{
    pub fn new(store: Arc<EventStore<TRecords>>) -> Self {
        Self { store }
    }

    /// Returns the deleted event.
    pub async fn handle(
        &self,
        partition: &PartitionKey,
        event_id: &str,
    ) -> Result<ScheduledEvent, ApplicationError> {
        self.store
            .remove(partition, event_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(event_id.to_string()))
    }
}

#[cfg(test)]
mod delete_event_handler_tests {
    use super::*;
    use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
    use crate::tests::fixtures::events::{ScheduledEventBuilder, fixed_clock, partition};
    use rstest::{fixture, rstest};

    type Records = InMemoryRecordStore<ScheduledEvent>;
    type BeforeEachReturn = (PartitionKey, Arc<EventStore<Records>>, DeleteEventHandler<Records>);

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let store = Arc::new(EventStore::new(
            Arc::new(Records::new()),
            Arc::new(fixed_clock()),
        ));
        (partition(), store.clone(), DeleteEventHandler::new(store))
    }

    #[rstest]
    #[tokio::test]
    async fn handle_delete_removes_the_event(before_each: BeforeEachReturn) {
        let (partition, store, handler) = before_each;
        let event = ScheduledEventBuilder::new().build();
        store.store(&partition, event.clone()).await.unwrap();

        let deleted = handler.handle(&partition, "0").await.expect("delete failed");

        assert_eq!(deleted, event);
        assert!(store.retrieve(&partition, "0").await.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn handle_delete_fails_for_an_unknown_event(before_each: BeforeEachReturn) {
        let (partition, _, handler) = before_each;
        let result = handler.handle(&partition, "0").await;
        assert!(matches!(result, Err(ApplicationError::NotFound(id)) if id == "0"));
    }
}
