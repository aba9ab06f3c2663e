//! Health visit log routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::health_access::{CreateHealthAccessRequest, HealthAccessWithName};
use domain::models::HealthAccess;
use persistence::repositories::HealthAccessRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// List visits with customer names, most recent first.
///
/// GET /api/health-access
pub async fn list_health_access(
    State(state): State<AppState>,
) -> Result<Json<Vec<HealthAccessWithName>>, ApiError> {
    let repo = HealthAccessRepository::new(state.pool.clone());
    let visits: Vec<HealthAccessWithName> = repo
        .list_with_names()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(visits))
}

/// Get one visit with the customer name.
///
/// GET /api/health-access/:visit_id
pub async fn get_health_access(
    State(state): State<AppState>,
    Path(visit_id): Path<i64>,
) -> Result<Json<HealthAccessWithName>, ApiError> {
    let repo = HealthAccessRepository::new(state.pool.clone());
    let visit = repo
        .find_by_id(visit_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Health visit {visit_id} not found")))?;

    Ok(Json(visit.into()))
}

/// Log a visit. The visit date defaults to now when omitted.
///
/// POST /api/health-access
pub async fn create_health_access(
    State(state): State<AppState>,
    Json(request): Json<CreateHealthAccessRequest>,
) -> Result<(StatusCode, Json<HealthAccess>), ApiError> {
    request.validate()?;

    let repo = HealthAccessRepository::new(state.pool.clone());
    let visit = repo
        .create(
            request.customer_id,
            request.symptoms.as_deref(),
            request.treatments.as_deref(),
            request.notes.as_deref(),
            request.visit_date,
        )
        .await?;

    info!(
        visit_id = visit.id,
        customer_id = visit.customer_id,
        "Health visit logged"
    );

    Ok((StatusCode::CREATED, Json(visit.into())))
}
