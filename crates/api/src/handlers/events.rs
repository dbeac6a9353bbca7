use axum::{
    extract::State,
    response::sse::{Event, Sse},
    Extension,
};
use brandwatch_domain::Actor;
use futures::stream::Stream;
use std::convert::Infallible;
use tracing::debug;

use crate::state::AppState;

pub async fn stream_events(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    debug!(actor = %actor.name, "Opening event stream");
    state.events.sse_response()
}
