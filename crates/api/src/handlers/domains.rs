use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, patch, post},
    Extension, Router,
};
use brandwatch_domain::{Actor, DomainRecord};
use tracing::{debug, info};

use crate::{
    dto::{
        BulkDeleteResponse, BulkImportRequest, BulkImportResponse, CreateDomainRequest,
        DomainListResponse, DomainsQuery, StatusPatchRequest, UpdateDomainRequest,
    },
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/domains", get(get_domains).post(create_domain))
        .route("/domains/bulk-import", post(bulk_import_domains))
        .route("/domains/bulk-delete-blocked", delete(delete_blocked_domains))
        .route(
            "/domains/{id}",
            get(get_domain_by_id).put(update_domain).delete(delete_domain),
        )
        .route("/domains/{id}/status", patch(patch_domain_status))
}

async fn get_domains(
    State(state): State<AppState>,
    Query(params): Query<DomainsQuery>,
) -> Result<Json<DomainListResponse>, ApiError> {
    let filter = params.to_filter()?;
    let limit = filter.limit;
    let page = state.domains.get_domains.list(filter).await?;
    debug!(
        count = page.domains.len(),
        total = page.total,
        "Domains retrieved successfully"
    );

    Ok(Json(DomainListResponse {
        pages: page.total.div_ceil(limit as u64),
        domains: page.domains,
        total: page.total,
        total_blocked: page.total_blocked,
        page: params.page(),
        limit,
    }))
}

async fn get_domain_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DomainRecord>, ApiError> {
    let record = state.domains.get_domains.get_by_id(id).await?;
    Ok(Json(record))
}

async fn create_domain(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(req): Json<CreateDomainRequest>,
) -> Result<(StatusCode, Json<DomainRecord>), ApiError> {
    let record = state
        .domains
        .create_domain
        .execute(&actor, req.domain, req.brand_id, req.note)
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}

async fn update_domain(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateDomainRequest>,
) -> Result<Json<DomainRecord>, ApiError> {
    let record = state
        .domains
        .update_domain
        .execute(&actor, id, req.into_update())
        .await?;

    Ok(Json(record))
}

async fn delete_domain(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.domains.delete_domain.execute(&actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn patch_domain_status(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
    Json(req): Json<StatusPatchRequest>,
) -> Result<Json<DomainRecord>, ApiError> {
    let record = state
        .domains
        .patch_status
        .execute(&actor, id, req.into_patch())
        .await?;

    Ok(Json(record))
}

async fn bulk_import_domains(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(req): Json<BulkImportRequest>,
) -> Result<Json<BulkImportResponse>, ApiError> {
    let report = state
        .domains
        .bulk_import
        .execute(&actor, req.domains)
        .await?;

    info!(actor = %actor.name, summary = %report.summary(), "Bulk import finished");
    Ok(Json(BulkImportResponse::from_report(report)))
}

async fn delete_blocked_domains(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> Result<Json<BulkDeleteResponse>, ApiError> {
    let count = state.domains.delete_blocked.execute(&actor).await?;

    Ok(Json(BulkDeleteResponse {
        message: format!("Deleted {} blocked domain(s)", count),
        count,
    }))
}
