//! Battery catalog and inventory repository.

use chrono::Utc;
use sqlx::PgPool;

use crate::entities::{
    BatteryCategoryDb, BatteryEntity, BatteryStatusDb, BatteryTypeEntity, BatteryWithTypeEntity,
};

/// Result of attempting to delete a physical battery unit.
#[derive(Debug, PartialEq, Eq)]
pub enum BatteryDeleteOutcome {
    Deleted,
    NotFound,
    CurrentlyRented,
    /// Referential-integrity policy: units with any rental history are kept.
    HasRentalHistory,
}

/// Repository for battery catalog and inventory operations.
#[derive(Clone)]
pub struct BatteryRepository {
    pool: PgPool,
}

impl BatteryRepository {
    /// Creates a new BatteryRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List catalog entries, oldest first.
    pub async fn list_types(&self) -> Result<Vec<BatteryTypeEntity>, sqlx::Error> {
        sqlx::query_as::<_, BatteryTypeEntity>(
            r#"
            SELECT id, name, category, capacity, rental_price, delivery_fee, created_at
            FROM battery_types
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Find a catalog entry by id.
    pub async fn find_type_by_id(
        &self,
        id: i64,
    ) -> Result<Option<BatteryTypeEntity>, sqlx::Error> {
        sqlx::query_as::<_, BatteryTypeEntity>(
            r#"
            SELECT id, name, category, capacity, rental_price, delivery_fee, created_at
            FROM battery_types
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Create a catalog entry and bulk-create `quantity` numbered units in
    /// the same transaction.
    pub async fn create_type_with_units(
        &self,
        name: &str,
        category: BatteryCategoryDb,
        capacity: Option<&str>,
        rental_price: f64,
        delivery_fee: f64,
        quantity: i32,
    ) -> Result<BatteryTypeEntity, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let battery_type = sqlx::query_as::<_, BatteryTypeEntity>(
            r#"
            INSERT INTO battery_types (name, category, capacity, rental_price, delivery_fee, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, category, capacity, rental_price, delivery_fee, created_at
            "#,
        )
        .bind(name)
        .bind(category)
        .bind(capacity)
        .bind(rental_price)
        .bind(delivery_fee)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        if quantity > 0 {
            sqlx::query(
                r#"
                INSERT INTO batteries (battery_type_id, unit_number, status)
                SELECT $1, n, 'available' FROM generate_series(1, $2) AS n
                "#,
            )
            .bind(battery_type.id)
            .bind(quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(battery_type)
    }

    /// List physical units joined with their catalog entry.
    pub async fn list_with_type(&self) -> Result<Vec<BatteryWithTypeEntity>, sqlx::Error> {
        sqlx::query_as::<_, BatteryWithTypeEntity>(
            r#"
            SELECT b.id, b.battery_type_id, t.name AS type_name, t.capacity,
                   b.unit_number, b.status
            FROM batteries b
            JOIN battery_types t ON t.id = b.battery_type_id
            ORDER BY t.name ASC, b.unit_number ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Find a physical unit by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<BatteryEntity>, sqlx::Error> {
        sqlx::query_as::<_, BatteryEntity>(
            r#"
            SELECT id, battery_type_id, unit_number, status, created_at, updated_at
            FROM batteries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Set a unit's status, refusing to touch a rented unit.
    ///
    /// The rented guard is part of the statement so a concurrent rental
    /// cannot slip between a read and the write. Returns `None` when the
    /// unit is missing or rented.
    pub async fn update_status(
        &self,
        id: i64,
        status: BatteryStatusDb,
    ) -> Result<Option<BatteryEntity>, sqlx::Error> {
        sqlx::query_as::<_, BatteryEntity>(
            r#"
            UPDATE batteries
            SET status = $2, updated_at = $3
            WHERE id = $1 AND status <> 'rented'
            RETURNING id, battery_type_id, unit_number, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
    }

    /// Delete a unit unless it is rented or has rental history.
    ///
    /// The history rule is an application-level policy, not a database
    /// constraint; the row lock keeps the check and the delete atomic.
    pub async fn delete(&self, id: i64) -> Result<BatteryDeleteOutcome, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let status: Option<(BatteryStatusDb,)> =
            sqlx::query_as("SELECT status FROM batteries WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let status = match status {
            Some((status,)) => status,
            None => return Ok(BatteryDeleteOutcome::NotFound),
        };
        if status == BatteryStatusDb::Rented {
            return Ok(BatteryDeleteOutcome::CurrentlyRented);
        }

        let history: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM battery_rentals WHERE battery_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
        if history.0 > 0 {
            return Ok(BatteryDeleteOutcome::HasRentalHistory);
        }

        sqlx::query("DELETE FROM batteries WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(BatteryDeleteOutcome::Deleted)
    }

    /// Number of catalog entries. Used by the seeding guard.
    pub async fn count_types(&self) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM battery_types")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }
}
