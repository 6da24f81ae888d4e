use axum::{Json, body::Bytes, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::events::core::event::{Venue, null_as_default};
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::modules::events::use_cases::create_event::handler::ApplicationError;
use crate::shell::state::AppState;

pub const INVALID_PAYLOAD: &str = "Invalid payload!";

/// Missing or `null` fields fall back to empty values so they surface as
/// validation errors. A client-supplied `id` is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateEventBody {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub venue: Venue,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: Vec<String>,
}

fn bad_request(message: Vec<String>) -> axum::response::Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { message })).into_response()
}

pub async fn handle(
    State(state): State<AppState>,
    body: Bytes,
) -> impl IntoResponse {
    // The body is parsed as JSON whatever the Content-Type header says.
    let body: CreateEventBody = match serde_json::from_slice(&body) {
        Ok(b) => b,
        Err(error) => {
            tracing::debug!(%error, "rejected event payload");
            return bad_request(vec![INVALID_PAYLOAD.to_string()]);
        }
    };

    let command = CreateEvent {
        event_id: Uuid::new_v4(),
        name: body.name,
        venue: body.venue,
        description: body.description,
        date: body.date,
    };

    match state.create_handler.handle(command).await {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(ApplicationError::Rejected(reasons)) => {
            bad_request(reasons.iter().map(ToString::to_string).collect())
        }
        Err(ApplicationError::Repository(error)) => {
            tracing::error!(%error, "failed to store event");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
