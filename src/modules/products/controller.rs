use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateProductDto, Product, UpdateStockDto};
use super::service::ProductService;

/// Add a product to the catalog (seller only).
#[instrument(skip(state, dto))]
pub async fn add_product(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateProductDto>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let product = ProductService::add_product(&state.db, dto, &state.media_config).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

#[instrument(skip(state))]
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = ProductService::list_products(&state.db).await?;

    Ok(Json(products))
}

#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, AppError> {
    let product = ProductService::get_product(&state.db, id).await?;

    Ok(Json(product))
}

/// Flip a product's availability (seller only).
#[instrument(skip(state))]
pub async fn update_stock(
    State(state): State<AppState>,
    Json(dto): Json<UpdateStockDto>,
) -> Result<Json<MessageResponse>, AppError> {
    ProductService::update_stock(&state.db, dto.id, dto.in_stock).await?;

    Ok(Json(MessageResponse {
        message: "Stock Updated".to_string(),
    }))
}
