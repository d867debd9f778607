use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::scheduling::adapters::inbound::http as command_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/commands", post(command_http::handle))
        .route("/health", get(command_http::health))
        .with_state(state)
}
