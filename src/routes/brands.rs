use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::brands::{BrandList, BrandPayload},
    error::AppResult,
    models::Brand,
    response::ApiResponse,
    routes::extract::ApiJson,
    services::brand_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_brands).post(create_brand))
        .route("/{id}", get(get_brand).put(update_brand).delete(delete_brand))
}

#[utoipa::path(
    get,
    path = "/api/brands",
    responses(
        (status = 200, description = "Brands as an array under `data`", body = ApiResponse<BrandList>),
        (status = 500, description = "Internal Server Error"),
    ),
    tag = "Brands"
)]
pub async fn list_brands(State(state): State<AppState>) -> AppResult<Json<ApiResponse<BrandList>>> {
    let resp = brand_service::list_brands(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/brands/{id}",
    params(
        ("id" = String, Path, description = "Brand ID")
    ),
    responses(
        (status = 200, description = "Get brand", body = ApiResponse<Brand>),
        (status = 404, description = "Brand not found"),
    ),
    tag = "Brands"
)]
pub async fn get_brand(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Brand>>> {
    let resp = brand_service::get_brand(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/brands",
    request_body = BrandPayload,
    responses(
        (status = 201, description = "Create brand", body = ApiResponse<Brand>),
        (status = 400, description = "Brand name is required"),
        (status = 500, description = "Internal Server Error"),
    ),
    tag = "Brands"
)]
pub async fn create_brand(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<BrandPayload>,
) -> AppResult<(StatusCode, Json<ApiResponse<Brand>>)> {
    let resp = brand_service::create_brand(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/brands/{id}",
    params(
        ("id" = String, Path, description = "Brand ID")
    ),
    request_body = BrandPayload,
    responses(
        (status = 200, description = "Rename brand and the products that carry its name", body = ApiResponse<Brand>),
        (status = 400, description = "Brand name is required"),
        (status = 404, description = "Brand not found"),
        (status = 500, description = "Internal Server Error"),
    ),
    tag = "Brands"
)]
pub async fn update_brand(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<BrandPayload>,
) -> AppResult<Json<ApiResponse<Brand>>> {
    let resp = brand_service::update_brand(&state, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/brands/{id}",
    params(
        ("id" = String, Path, description = "Brand ID")
    ),
    responses(
        (status = 200, description = "Deleted brand; products are left as they are"),
        (status = 404, description = "Brand not found"),
        (status = 500, description = "Internal Server Error"),
    ),
    tag = "Brands"
)]
pub async fn delete_brand(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = brand_service::delete_brand(&state, &id).await?;
    Ok(Json(resp))
}
