// Entry point for already-parsed chat commands.
//
// Responsibilities
// - Resolve the partition from the server and channel the command came from.
// - Dispatch the command word to one use case handler.
// - Render the outcome, or the rejection, as the text shown in the channel.

use crate::modules::scheduling::adapters::outbound::event_store::EventStore;
use crate::modules::scheduling::core::attendee::Attendee;
use crate::modules::scheduling::core::event::{Response, ScheduledEvent};
use crate::modules::scheduling::use_cases::create_event::command::CreateEvent;
use crate::modules::scheduling::use_cases::create_event::handler::CreateEventHandler;
use crate::modules::scheduling::use_cases::delete_event::handler::DeleteEventHandler;
use crate::modules::scheduling::use_cases::errors::{ApplicationError, ValidationError};
use crate::modules::scheduling::use_cases::list_events::handler::ListEventsHandler;
use crate::modules::scheduling::use_cases::respond_to_event::command::RespondToEvent;
use crate::modules::scheduling::use_cases::respond_to_event::handler::RespondToEventHandler;
use crate::modules::scheduling::use_cases::show_responses::handler::ShowResponsesHandler;
use crate::shared::core::primitives::PartitionKey;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

pub const UNRECOGNISED: &str = "Command not recognised";

/// Where a command came from and who sent it, as reported by the chat platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    pub server: String,
    pub channel: String,
    pub caller_id: String,
    pub caller_name: String,
}

impl CommandContext {
    pub fn partition(&self) -> PartitionKey {
        PartitionKey::new(&self.server, &self.channel)
    }

    pub fn attendee(&self) -> Attendee {
        Attendee::new(&self.caller_id, &self.caller_name)
    }
}

pub struct CommandRouter<TRecords>
where
    TRecords: RecordStore<ScheduledEvent> + 'static,
{
    prefix: String,
    create: CreateEventHandler<TRecords>,
    delete: DeleteEventHandler<TRecords>,
    list: ListEventsHandler<TRecords>,
    respond: RespondToEventHandler<TRecords>,
    responses: ShowResponsesHandler<TRecords>,
}

impl<TRecords> CommandRouter<TRecords>
where
    TRecords: RecordStore<ScheduledEvent> + 'static,
{
    pub fn new(store: Arc<EventStore<TRecords>>, prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            create: CreateEventHandler::new(store.clone()),
            delete: DeleteEventHandler::new(store.clone()),
            list: ListEventsHandler::new(store.clone()),
            respond: RespondToEventHandler::new(store.clone()),
            responses: ShowResponsesHandler::new(store),
        }
    }

    /// Text to show in the channel, whatever the outcome. Failed saves are logged here.
    pub async fn reply(&self, context: &CommandContext, command: &str, args: &[String]) -> String {
        match self.dispatch(context, command, args).await {
            Ok(text) => text,
            Err(err @ ApplicationError::Persistence(_)) => {
                tracing::error!(
                    partition = %context.partition(),
                    command,
                    error = %err,
                    "command was not saved"
                );
                err.to_string()
            }
            Err(err) => err.to_string(),
        }
    }

    pub async fn dispatch(
        &self,
        context: &CommandContext,
        command: &str,
        args: &[String],
    ) -> Result<String, ApplicationError> {
        tracing::debug!(
            partition = %context.partition(),
            caller = %context.caller_id,
            command,
            ?args,
            "dispatching command"
        );
        let partition = context.partition();

        match command.to_ascii_lowercase().as_str() {
            "create" => {
                let (name, phrase) = args
                    .split_first()
                    .ok_or(ValidationError::MissingArgument("event name"))?;
                if phrase.is_empty() {
                    return Err(ValidationError::MissingArgument("event time").into());
                }
                let event = self
                    .create
                    .handle(&partition, CreateEvent::new(name, phrase.join(" ")))
                    .await?;
                Ok(format!(
                    "New event {} scheduled for {} with id {}",
                    event.name,
                    event.render_time(),
                    event.id
                ))
            }
            "delete" => {
                let event = self.delete.handle(&partition, event_id(args)?).await?;
                Ok(format!("Deleted event {}: {}", event.id, event.name))
            }
            "list" => self.list.handle(&partition).await,
            "accept" | "yes" => self.respond(context, args, Response::Accepted).await,
            "decline" | "no" => self.respond(context, args, Response::Declined).await,
            "maybe" => self.respond(context, args, Response::Maybe).await,
            "responses" => self.responses.handle(&partition, event_id(args)?).await,
            "help" => Ok(self.help()),
            _ => Ok(UNRECOGNISED.to_string()),
        }
    }

    async fn respond(
        &self,
        context: &CommandContext,
        args: &[String],
        response: Response,
    ) -> Result<String, ApplicationError> {
        let command = RespondToEvent {
            event_id: event_id(args)?.to_string(),
            attendee: context.attendee(),
            response,
        };
        let event = self.respond.handle(&context.partition(), command).await?;
        let verb = match response {
            Response::Accepted => "accepted",
            Response::Declined => "declined",
            Response::Maybe => "might attend",
        };
        Ok(format!(
            "{} {verb} {}: {}",
            context.caller_name, event.id, event.name
        ))
    }

    pub fn help(&self) -> String {
        format!(
            "Usage: {prefix} <COMMAND> <ARGS>
where <COMMAND> one of:
list
  List all upcoming events in this channel
create name time
  Create a new event at the given time, e.g. `{prefix} create standup tomorrow 9:30am`
delete id
  Delete the event with the given id
accept|yes id
  Register for the event with the given id
decline|no id
  Decline the event with the given id
maybe id
  Sit on the fence for the event with the given id
responses id
  List the responses to the event (yes, no, maybe)
help
  Show this message",
            prefix = self.prefix
        )
    }
}

/// Object-safe view of a router, so the shell can hold one without naming its record store.
#[async_trait::async_trait]
pub trait ChatCommands: Send + Sync {
    async fn execute(
        &self,
        context: &CommandContext,
        command: &str,
        args: &[String],
    ) -> Result<String, ApplicationError>;
}

#[async_trait::async_trait]
impl<TRecords> ChatCommands for CommandRouter<TRecords>
where
    TRecords: RecordStore<ScheduledEvent> + 'static,
{
    async fn execute(
        &self,
        context: &CommandContext,
        command: &str,
        args: &[String],
    ) -> Result<String, ApplicationError> {
        self.dispatch(context, command, args).await
    }
}

fn event_id(args: &[String]) -> Result<&str, ValidationError> {
    args.first()
        .map(String::as_str)
        .ok_or(ValidationError::MissingArgument("event id"))
}
