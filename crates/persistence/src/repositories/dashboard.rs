//! Dashboard statistics repository.

use chrono::{DateTime, Duration, Utc};
use domain::models::DashboardStats;
use sqlx::PgPool;

/// Repository for read-only dashboard aggregation.
#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    /// Creates a new DashboardRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Activity counts for the trailing 30-day window ending at `now`.
    ///
    /// The window is inclusive of both endpoints: a row stamped exactly at
    /// `now - 30d` or at `now` is counted.
    pub async fn stats_for_window_ending(
        &self,
        now: DateTime<Utc>,
    ) -> Result<DashboardStats, sqlx::Error> {
        let start = now - Duration::days(30);

        let rentals = self
            .count_between("battery_rentals", "rented_at", start, now)
            .await?;
        let water_sales = self
            .count_between("water_sales", "sold_at", start, now)
            .await?;
        let internet_accesses = self
            .count_between("internet_access", "purchased_at", start, now)
            .await?;

        Ok(DashboardStats {
            rentals,
            water_sales,
            internet_accesses,
        })
    }

    async fn count_between(
        &self,
        table: &str,
        column: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as(&format!(
            "SELECT COUNT(*) FROM {table} WHERE {column} BETWEEN $1 AND $2"
        ))
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;
        Ok(count.0)
    }
}
