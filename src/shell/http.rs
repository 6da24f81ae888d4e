use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::events::use_cases::create_event::inbound::http as create_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/events",
            get(list_http::handle).put(create_http::handle),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
