//! Shared search session handlers and the Server-Sent Events feed

use crate::state::AppState;
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use bookscout_core::{SearchMode, SessionSnapshot};
use futures::stream::Stream;
use serde::{Deserialize, Serialize};
use tokio_stream::wrappers::WatchStream;
use tokio_stream::StreamExt;

/// Current session outcome
pub async fn get_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session.snapshot())
}

/// Search request body
#[derive(Debug, Deserialize)]
pub struct SessionSearchRequest {
    #[serde(default)]
    pub query: String,

    #[serde(default)]
    pub mode: SearchMode,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SessionSearchResponse {
    /// Generation this request was issued as
    pub generation: u64,

    /// Whether its outcome is the one now shown
    pub applied: bool,

    /// Session state after the request settled
    pub snapshot: SessionSnapshot,
}

/// Run a search through the shared session
///
/// Overlapping requests all complete; only the most recently issued one updates the
/// session.
pub async fn session_search(
    State(state): State<AppState>,
    Json(request): Json<SessionSearchRequest>,
) -> Json<SessionSearchResponse> {
    let (ticket, applied) = state
        .session
        .run(&state.catalog, &request.query, request.mode)
        .await;

    Json(SessionSearchResponse {
        generation: ticket.generation(),
        applied,
        snapshot: state.session.snapshot(),
    })
}

/// SSE endpoint streaming every applied session change, starting with the current one
pub async fn session_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let stream = WatchStream::new(state.session.subscribe());

    let event_stream =
        stream.map(|snapshot| Event::default().event("outcome").json_data(&snapshot));

    Sse::new(event_stream).keep_alive(KeepAlive::default())
}
