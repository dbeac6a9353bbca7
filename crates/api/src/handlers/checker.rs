use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use brandwatch_application::use_cases::{BulkStatusOutcome, StatusUpdateRequest};
use brandwatch_domain::{Actor, DomainError};
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    dto::{
        BulkCheckRequest, BulkStatusUpdateRequest, CheckerUrl, StatusUpdateBody,
        StatusUpdateResponse,
    },
    errors::ApiError,
    state::AppState,
};

/// Endpoints the checking system calls without a token.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/urls", get(get_all_urls))
        .route("/urls/update", post(update_url_status))
        .route("/urls/bulk-update", post(bulk_update_url_status))
}

pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/bulk-check", post(bulk_check))
}

async fn get_all_urls(State(state): State<AppState>) -> Result<Json<Vec<CheckerUrl>>, ApiError> {
    let records = state.checker.list_urls.execute().await?;
    debug!(count = records.len(), "Checker url list served");
    Ok(Json(records.iter().map(CheckerUrl::from_record).collect()))
}

async fn update_url_status(
    State(state): State<AppState>,
    Json(body): Json<StatusUpdateBody>,
) -> Result<Json<StatusUpdateResponse>, ApiError> {
    let request = body.into_request()?;
    let change = state
        .checker
        .update_status
        .execute(request.id, request.observation)
        .await?;

    Ok(Json(StatusUpdateResponse {
        success: true,
        message: "Domain status updated".to_string(),
        data: change,
    }))
}

async fn bulk_update_url_status(
    State(state): State<AppState>,
    Json(body): Json<BulkStatusUpdateRequest>,
) -> Result<Json<BulkStatusOutcome>, ApiError> {
    if body.updates.is_empty() {
        return Err(ApiError(DomainError::InvalidInput(
            "updates array is required".to_string(),
        )));
    }

    let requests = body
        .updates
        .into_iter()
        .map(StatusUpdateBody::into_request)
        .collect::<Result<Vec<StatusUpdateRequest>, DomainError>>()?;

    let outcome = state.checker.bulk_update_status.execute(requests).await;
    Ok(Json(outcome))
}

async fn bulk_check(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(body): Json<BulkCheckRequest>,
) -> Result<Json<Value>, ApiError> {
    info!(actor = %actor.name, count = body.urls.len(), "Bulk check requested");
    let response = state
        .checker
        .bulk_check
        .execute(body.urls, &body.mode)
        .await?;

    Ok(Json(response))
}
