// Records an attendee's response.
//
// The lookup, the move between response lists and the save happen under the partition lock,
// so simultaneous answers to the same event are all kept.

use crate::modules::scheduling::adapters::outbound::event_store::EventStore;
use crate::modules::scheduling::core::event::ScheduledEvent;
use crate::modules::scheduling::use_cases::errors::ApplicationError;
use crate::modules::scheduling::use_cases::respond_to_event::command::RespondToEvent;
use crate::shared::core::primitives::PartitionKey;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

pub struct RespondToEventHandler<TRecords>
where
    TRecords: RecordStore<ScheduledEvent> + 'static,
{
    store: Arc<EventStore<TRecords>>,
}

impl<TRecords> RespondToEventHandler<TRecords>
where
    TRecords: RecordStore<ScheduledEvent> + 'static,
{
    pub fn new(store: Arc<EventStore<TRecords>>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        partition: &PartitionKey,
        command: RespondToEvent,
    ) -> Result<ScheduledEvent, ApplicationError> {
        let RespondToEvent {
            event_id,
            attendee,
            response,
        } = command;
        self.store
            .update(partition, &event_id, move |event| {
                event.respond(attendee, response)
            })
            .await?
            .ok_or(ApplicationError::NotFound(event_id))
    }
}

#[cfg(test)]
mod respond_to_event_handler_tests {
    use super::*;
    use crate::modules::scheduling::core::attendee::Attendee;
    use crate::modules::scheduling::core::event::Response;
    use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
    use crate::tests::fixtures::events::{ScheduledEventBuilder, fixed_clock, partition, teddy};
    use rstest::{fixture, rstest};

    type Records = InMemoryRecordStore<ScheduledEvent>;
    type BeforeEachReturn = (
        PartitionKey,
        Arc<EventStore<Records>>,
        RespondToEventHandler<Records>,
    );

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let store = Arc::new(EventStore::new(
            Arc::new(Records::new()),
            Arc::new(fixed_clock()),
        ));
        (partition(), store.clone(), RespondToEventHandler::new(store))
    }

    fn respond(event_id: &str, response: Response) -> RespondToEvent {
        RespondToEvent {
            event_id: event_id.to_string(),
            attendee: teddy(),
            response,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn handle_respond_moves_the_attendee_between_lists(before_each: BeforeEachReturn) {
        let (partition, store, handler) = before_each;
        store
            .store(&partition, ScheduledEventBuilder::new().build())
            .await
            .unwrap();

        handler
            .handle(&partition, respond("0", Response::Accepted))
            .await
            .expect("accept failed");
        let event = handler
            .handle(&partition, respond("0", Response::Declined))
            .await
            .expect("decline failed");

        assert!(event.accepted.is_empty());
        assert_eq!(event.declined, vec![teddy()]);
        assert_eq!(store.retrieve(&partition, "0").await.unwrap(), event);
    }

    #[rstest]
    #[tokio::test]
    async fn handle_respond_keeps_other_attendees(before_each: BeforeEachReturn) {
        let (partition, store, handler) = before_each;
        let rosa = Attendee::new("2", "rosa");
        store
            .store(
                &partition,
                ScheduledEventBuilder::new().accepted(rosa.clone()).build(),
            )
            .await
            .unwrap();

        let event = handler
            .handle(&partition, respond("0", Response::Maybe))
            .await
            .expect("maybe failed");

        assert_eq!(event.accepted, vec![rosa]);
        assert_eq!(event.maybe, vec![teddy()]);
    }

    #[rstest]
    #[tokio::test]
    async fn handle_respond_fails_for_an_unknown_event(before_each: BeforeEachReturn) {
        let (partition, _, handler) = before_each;
        let result = handler
            .handle(&partition, respond("3", Response::Accepted))
            .await;
        assert_eq!(
            result.unwrap_err().to_string(),
            ApplicationError::NotFound("3".into()).to_string()
        );
    }
}
