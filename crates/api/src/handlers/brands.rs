use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Extension, Router,
};
use brandwatch_domain::Actor;
use tracing::debug;

use crate::{
    dto::{BrandResponse, BrandsQuery, CreateBrandRequest, UpdateBrandRequest},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/brands", get(get_all_brands).post(create_brand))
        .route(
            "/brands/{id}",
            get(get_brand_by_id).put(update_brand).delete(delete_brand),
        )
}

async fn get_all_brands(
    State(state): State<AppState>,
    Query(params): Query<BrandsQuery>,
) -> Result<Json<Vec<BrandResponse>>, ApiError> {
    let brands = state.brands.get_brands.get_all(params.active).await?;
    debug!(count = brands.len(), "Brands retrieved successfully");
    Ok(Json(
        brands.into_iter().map(BrandResponse::from_brand).collect(),
    ))
}

async fn get_brand_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BrandResponse>, ApiError> {
    let (brand, domain_count) = state.brands.get_brands.get_by_id(id).await?;
    Ok(Json(
        BrandResponse::from_brand(brand).with_domain_count(domain_count),
    ))
}

async fn create_brand(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(req): Json<CreateBrandRequest>,
) -> Result<(StatusCode, Json<BrandResponse>), ApiError> {
    let brand = state
        .brands
        .create_brand
        .execute(&actor, req.name, req.code, req.description, req.color)
        .await?;

    Ok((StatusCode::CREATED, Json(BrandResponse::from_brand(brand))))
}

async fn update_brand(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateBrandRequest>,
) -> Result<Json<BrandResponse>, ApiError> {
    let brand = state
        .brands
        .update_brand
        .execute(&actor, id, req.into_update())
        .await?;

    Ok(Json(BrandResponse::from_brand(brand)))
}

async fn delete_brand(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.brands.delete_brand.execute(&actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
