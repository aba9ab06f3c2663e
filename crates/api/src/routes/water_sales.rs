//! Water sale routes.

use axum::{extract::State, http::StatusCode, Json};
use domain::models::water_sale::{CreateWaterSaleRequest, WaterSaleWithName};
use domain::models::WaterSale;
use persistence::repositories::WaterSaleRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// List sales with customer names, newest first.
///
/// GET /api/water-sales
pub async fn list_water_sales(
    State(state): State<AppState>,
) -> Result<Json<Vec<WaterSaleWithName>>, ApiError> {
    let repo = WaterSaleRepository::new(state.pool.clone());
    let sales: Vec<WaterSaleWithName> = repo
        .list_with_names()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(sales))
}

/// Record a sale. A missing customer surfaces as the foreign-key 404.
///
/// POST /api/water-sales
pub async fn create_water_sale(
    State(state): State<AppState>,
    Json(request): Json<CreateWaterSaleRequest>,
) -> Result<(StatusCode, Json<WaterSale>), ApiError> {
    request.validate()?;

    let repo = WaterSaleRepository::new(state.pool.clone());
    let sale = repo
        .create(request.customer_id, request.size, request.price)
        .await?;

    info!(
        sale_id = sale.id,
        customer_id = sale.customer_id,
        size = sale.size,
        "Water sale recorded"
    );

    Ok((StatusCode::CREATED, Json(sale.into())))
}
