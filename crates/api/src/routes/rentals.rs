//! Battery rental routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::rental::{CreateRentalRequest, RentalWithNames};
use domain::models::BatteryRental;
use persistence::repositories::{
    CustomerRepository, RentalCreateOutcome, RentalRepository, RentalReturnOutcome,
};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// List rentals with customer and catalog names, newest first.
///
/// GET /api/rentals
pub async fn list_rentals(
    State(state): State<AppState>,
) -> Result<Json<Vec<RentalWithNames>>, ApiError> {
    let repo = RentalRepository::new(state.pool.clone());
    let rentals: Vec<RentalWithNames> = repo
        .list_with_names()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(rentals))
}

/// Rent out a unit, or record a type-only charging sale.
///
/// POST /api/rentals
pub async fn create_rental(
    State(state): State<AppState>,
    Json(request): Json<CreateRentalRequest>,
) -> Result<(StatusCode, Json<BatteryRental>), ApiError> {
    request.validate()?;

    let customers = CustomerRepository::new(state.pool.clone());
    if customers.find_by_id(request.customer_id).await?.is_none() {
        return Err(ApiError::NotFound(format!(
            "Customer {} not found",
            request.customer_id
        )));
    }

    let repo = RentalRepository::new(state.pool.clone());
    let outcome = repo
        .create(request.customer_id, request.battery_type_id, request.battery_id)
        .await?;

    match outcome {
        RentalCreateOutcome::Created(rental) => {
            info!(
                rental_id = rental.id,
                customer_id = rental.customer_id,
                battery_id = ?rental.battery_id,
                "Rental created"
            );
            Ok((StatusCode::CREATED, Json(rental.into())))
        }
        RentalCreateOutcome::TypeNotFound => Err(ApiError::NotFound(format!(
            "Battery type {} not found",
            request.battery_type_id
        ))),
        RentalCreateOutcome::BatteryUnavailable => Err(ApiError::Conflict(
            "Battery is not available for rent".to_string(),
        )),
    }
}

/// Close a rental, flipping the attached unit back to available.
///
/// POST /api/rentals/:rental_id/return
pub async fn return_rental(
    State(state): State<AppState>,
    Path(rental_id): Path<i64>,
) -> Result<Json<BatteryRental>, ApiError> {
    let repo = RentalRepository::new(state.pool.clone());

    match repo.close(rental_id).await? {
        RentalReturnOutcome::Returned(rental) => {
            info!(
                rental_id,
                battery_id = ?rental.battery_id,
                "Rental returned"
            );
            Ok(Json(rental.into()))
        }
        RentalReturnOutcome::AlreadyReturned => Err(ApiError::Conflict(
            "Rental has already been returned".to_string(),
        )),
        RentalReturnOutcome::NotFound => Err(ApiError::NotFound(format!(
            "Rental {rental_id} not found"
        ))),
    }
}
