//! Internet-access voucher routes.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use domain::models::internet_access::{CreateInternetAccessRequest, InternetAccessWithName};
use domain::models::InternetAccess;
use persistence::repositories::InternetAccessRepository;
use shared::passwords::generate_wifi_password;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// List vouchers with customer names and a derived expired flag.
///
/// GET /api/internet-access
pub async fn list_internet_access(
    State(state): State<AppState>,
) -> Result<Json<Vec<InternetAccessWithName>>, ApiError> {
    let now = Utc::now();
    let repo = InternetAccessRepository::new(state.pool.clone());
    let vouchers: Vec<InternetAccessWithName> = repo
        .list_with_names()
        .await?
        .into_iter()
        .map(|entity| entity.into_with_status(now))
        .collect();
    Ok(Json(vouchers))
}

/// Sell a voucher: generate the WiFi password and pin the expiry from the
/// purchase instant.
///
/// POST /api/internet-access
pub async fn create_internet_access(
    State(state): State<AppState>,
    Json(request): Json<CreateInternetAccessRequest>,
) -> Result<(StatusCode, Json<InternetAccess>), ApiError> {
    request.validate()?;

    let purchased_at = Utc::now();
    let expires_at = request.duration_type.expires_at(purchased_at);
    let wifi_password = generate_wifi_password();

    let repo = InternetAccessRepository::new(state.pool.clone());
    let voucher = repo
        .create(
            request.customer_id,
            &wifi_password,
            request.duration_type.into(),
            request.price,
            purchased_at,
            expires_at,
        )
        .await?;

    info!(
        voucher_id = voucher.id,
        customer_id = voucher.customer_id,
        duration = %request.duration_type,
        "Internet access voucher sold"
    );

    Ok((StatusCode::CREATED, Json(voucher.into())))
}
