//! Dashboard statistics route.

use axum::{extract::State, Json};
use chrono::Utc;
use domain::models::DashboardStats;
use persistence::repositories::DashboardRepository;

use crate::app::AppState;
use crate::error::ApiError;

/// Activity counts for the trailing 30 days.
///
/// GET /api/dashboard/stats
pub async fn dashboard_stats(
    State(state): State<AppState>,
) -> Result<Json<DashboardStats>, ApiError> {
    let repo = DashboardRepository::new(state.pool.clone());
    let stats = repo.stats_for_window_ending(Utc::now()).await?;
    Ok(Json(stats))
}
