//! Water sale repository.

use chrono::Utc;
use sqlx::PgPool;

use crate::entities::{WaterSaleEntity, WaterSaleWithNameEntity};

/// Repository for water sale operations.
#[derive(Clone)]
pub struct WaterSaleRepository {
    pool: PgPool,
}

impl WaterSaleRepository {
    /// Creates a new WaterSaleRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List sales with customer names, newest first.
    pub async fn list_with_names(&self) -> Result<Vec<WaterSaleWithNameEntity>, sqlx::Error> {
        sqlx::query_as::<_, WaterSaleWithNameEntity>(
            r#"
            SELECT s.id, s.customer_id,
                   c.first_name || ' ' || c.family_name AS customer_name,
                   s.size, s.price, s.sold_at
            FROM water_sales s
            JOIN customers c ON c.id = s.customer_id
            ORDER BY s.sold_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Record a sale.
    pub async fn create(
        &self,
        customer_id: i64,
        size: f64,
        price: f64,
    ) -> Result<WaterSaleEntity, sqlx::Error> {
        sqlx::query_as::<_, WaterSaleEntity>(
            r#"
            INSERT INTO water_sales (customer_id, size, price, sold_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, customer_id, size, price, sold_at
            "#,
        )
        .bind(customer_id)
        .bind(size)
        .bind(price)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
    }
}
