use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Extension, Router,
};
use brandwatch_domain::{Actor, DomainLog};

use crate::{dto::LogsQuery, errors::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/logs", get(get_logs))
}

async fn get_logs(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Query(params): Query<LogsQuery>,
) -> Result<Json<Vec<DomainLog>>, ApiError> {
    let logs = state.domains.get_logs.execute(&actor, params.limit).await?;
    Ok(Json(logs))
}
