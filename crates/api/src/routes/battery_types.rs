//! Battery catalog routes.

use axum::{extract::State, http::StatusCode, Json};
use domain::models::battery::CreateBatteryTypeRequest;
use domain::models::BatteryType;
use persistence::repositories::BatteryRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// List catalog entries.
///
/// GET /api/battery-types
pub async fn list_battery_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<BatteryType>>, ApiError> {
    let repo = BatteryRepository::new(state.pool.clone());
    let types: Vec<BatteryType> = repo
        .list_types()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(types))
}

/// Create a catalog entry, bulk-creating numbered units for battery
/// products.
///
/// POST /api/battery-types
pub async fn create_battery_type(
    State(state): State<AppState>,
    Json(request): Json<CreateBatteryTypeRequest>,
) -> Result<(StatusCode, Json<BatteryType>), ApiError> {
    request.validate()?;

    let repo = BatteryRepository::new(state.pool.clone());
    let battery_type = repo
        .create_type_with_units(
            &request.name,
            request.category.into(),
            request.capacity.as_deref(),
            request.rental_price,
            request.delivery_fee,
            request.quantity,
        )
        .await?;

    info!(
        battery_type_id = battery_type.id,
        name = %battery_type.name,
        quantity = request.quantity,
        "Battery type created"
    );

    Ok((StatusCode::CREATED, Json(battery_type.into())))
}
