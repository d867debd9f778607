use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::scheduling::adapters::inbound::command_router::CommandContext;
use crate::modules::scheduling::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

/// One chat command as delivered by the chat platform connector.
#[derive(Debug, Deserialize)]
pub struct CommandBody {
    pub server: String,
    pub channel: String,
    pub caller_id: String,
    pub caller_name: String,
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CommandBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return (StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()).into_response();
        }
    };

    let context = CommandContext {
        server: body.server,
        channel: body.channel,
        caller_id: body.caller_id,
        caller_name: body.caller_name,
    };

    match state
        .commands
        .execute(&context, &body.command, &body.args)
        .await
    {
        Ok(text) => (StatusCode::OK, text).into_response(),
        Err(err @ ApplicationError::Validation(_)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()).into_response()
        }
        Err(err @ ApplicationError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, err.to_string()).into_response()
        }
        Err(err @ ApplicationError::Persistence(_)) => {
            tracing::error!(
                partition = %context.partition(),
                command = %body.command,
                error = %err,
                "command was not saved"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

pub async fn health() -> &'static str {
    "ok"
}
