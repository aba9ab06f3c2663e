//! Internet-access voucher repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::entities::{InternetAccessEntity, InternetAccessWithNameEntity, VoucherDurationDb};

/// Repository for internet-access voucher operations.
#[derive(Clone)]
pub struct InternetAccessRepository {
    pool: PgPool,
}

impl InternetAccessRepository {
    /// Creates a new InternetAccessRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List vouchers with customer names, newest first.
    pub async fn list_with_names(
        &self,
    ) -> Result<Vec<InternetAccessWithNameEntity>, sqlx::Error> {
        sqlx::query_as::<_, InternetAccessWithNameEntity>(
            r#"
            SELECT a.id, a.customer_id,
                   c.first_name || ' ' || c.family_name AS customer_name,
                   a.wifi_password, a.duration_type, a.price, a.purchased_at, a.expires_at
            FROM internet_access a
            JOIN customers c ON c.id = a.customer_id
            ORDER BY a.purchased_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Record a voucher sale. `expires_at` is derived by the caller from
    /// `purchased_at` and the duration code, and never changes afterwards.
    pub async fn create(
        &self,
        customer_id: i64,
        wifi_password: &str,
        duration_type: VoucherDurationDb,
        price: f64,
        purchased_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<InternetAccessEntity, sqlx::Error> {
        sqlx::query_as::<_, InternetAccessEntity>(
            r#"
            INSERT INTO internet_access
                (customer_id, wifi_password, duration_type, price, purchased_at, expires_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, customer_id, wifi_password, duration_type, price, purchased_at, expires_at
            "#,
        )
        .bind(customer_id)
        .bind(wifi_password)
        .bind(duration_type)
        .bind(price)
        .bind(purchased_at)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await
    }
}
