use crate::handlers;
use crate::middleware::require_actor;
use crate::state::AppState;
use axum::{middleware, routing::get, Router};

/// Routes relative to the `/api` prefix.
///
/// Health and the checker-facing `/urls` endpoints are public; everything
/// else needs a token.
pub fn create_api_routes(state: AppState) -> Router {
    let protected = Router::new()
        .merge(handlers::brands::routes())
        .merge(handlers::domains::routes())
        .merge(handlers::logs::routes())
        .merge(handlers::checker::protected_routes())
        .route("/events", get(handlers::events::stream_events))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_actor));

    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(handlers::checker::public_routes())
        .merge(protected)
        .with_state(state)
}
