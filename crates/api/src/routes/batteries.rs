//! Physical battery inventory routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::battery::{BatteryWithType, UpdateBatteryRequest};
use domain::models::{Battery, BatteryStatus};
use persistence::repositories::{BatteryDeleteOutcome, BatteryRepository};
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;

/// List physical units with their catalog entry.
///
/// GET /api/batteries
pub async fn list_batteries(
    State(state): State<AppState>,
) -> Result<Json<Vec<BatteryWithType>>, ApiError> {
    let repo = BatteryRepository::new(state.pool.clone());
    let batteries: Vec<BatteryWithType> = repo
        .list_with_type()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(batteries))
}

/// Toggle a unit between available and maintenance.
///
/// PUT /api/batteries/:battery_id
///
/// The rented status is owned by the rental flow and cannot be set here.
pub async fn update_battery(
    State(state): State<AppState>,
    Path(battery_id): Path<i64>,
    Json(request): Json<UpdateBatteryRequest>,
) -> Result<Json<Battery>, ApiError> {
    if request.status == BatteryStatus::Rented {
        return Err(ApiError::Validation(
            "Battery status can only be set to available or maintenance".to_string(),
        ));
    }

    let repo = BatteryRepository::new(state.pool.clone());
    let updated = repo
        .update_status(battery_id, request.status.into())
        .await?;

    match updated {
        Some(battery) => {
            info!(battery_id, status = %request.status, "Battery status updated");
            Ok(Json(battery.into()))
        }
        None => {
            // The guarded update refuses rented units; tell those apart
            // from a bad id.
            match repo.find_by_id(battery_id).await? {
                Some(_) => Err(ApiError::Conflict(
                    "Battery is currently rented".to_string(),
                )),
                None => Err(ApiError::NotFound(format!(
                    "Battery {battery_id} not found"
                ))),
            }
        }
    }
}

/// Delete a unit, unless it is rented or carries rental history.
///
/// DELETE /api/batteries/:battery_id
pub async fn delete_battery(
    State(state): State<AppState>,
    Path(battery_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = BatteryRepository::new(state.pool.clone());

    match repo.delete(battery_id).await? {
        BatteryDeleteOutcome::Deleted => {
            info!(battery_id, "Battery deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        BatteryDeleteOutcome::NotFound => Err(ApiError::NotFound(format!(
            "Battery {battery_id} not found"
        ))),
        BatteryDeleteOutcome::CurrentlyRented => Err(ApiError::Conflict(
            "Battery is currently rented".to_string(),
        )),
        BatteryDeleteOutcome::HasRentalHistory => Err(ApiError::Conflict(
            "Battery has rental history and cannot be deleted".to_string(),
        )),
    }
}
