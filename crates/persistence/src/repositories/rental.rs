//! Battery rental repository.

use chrono::Utc;
use sqlx::PgPool;

use crate::entities::{BatteryTypeEntity, RentalEntity, RentalWithNamesEntity};

const RENTAL_COLUMNS: &str =
    "id, customer_id, battery_id, battery_type_id, price, delivery_fee, rented_at, returned_at";

/// Result of attempting to create a rental.
#[derive(Debug)]
pub enum RentalCreateOutcome {
    Created(RentalEntity),
    TypeNotFound,
    /// The requested unit is missing, not of the requested type, or not
    /// available. The compare-and-set leaves nothing mutated.
    BatteryUnavailable,
}

/// Result of attempting to close a rental.
#[derive(Debug)]
pub enum RentalReturnOutcome {
    Returned(RentalEntity),
    AlreadyReturned,
    NotFound,
}

/// Repository for battery rental operations.
#[derive(Clone)]
pub struct RentalRepository {
    pool: PgPool,
}

impl RentalRepository {
    /// Creates a new RentalRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List rentals with customer and catalog names, newest first.
    pub async fn list_with_names(&self) -> Result<Vec<RentalWithNamesEntity>, sqlx::Error> {
        sqlx::query_as::<_, RentalWithNamesEntity>(
            r#"
            SELECT r.id, r.customer_id,
                   c.first_name || ' ' || c.family_name AS customer_name,
                   r.battery_id, b.unit_number, t.name AS battery_type,
                   r.price, r.delivery_fee, r.rented_at, r.returned_at
            FROM battery_rentals r
            JOIN customers c ON c.id = r.customer_id
            JOIN battery_types t ON t.id = r.battery_type_id
            LEFT JOIN batteries b ON b.id = r.battery_id
            ORDER BY r.rented_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Create a rental, flipping the chosen unit available → rented in the
    /// same transaction.
    ///
    /// The availability check is a conditional update (`WHERE status =
    /// 'available'`), not a read followed by a write, so two concurrent
    /// rentals of the same unit cannot both succeed. Price and delivery fee
    /// are copied from the catalog entry.
    pub async fn create(
        &self,
        customer_id: i64,
        battery_type_id: i64,
        battery_id: Option<i64>,
    ) -> Result<RentalCreateOutcome, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let battery_type = sqlx::query_as::<_, BatteryTypeEntity>(
            r#"
            SELECT id, name, category, capacity, rental_price, delivery_fee, created_at
            FROM battery_types
            WHERE id = $1
            "#,
        )
        .bind(battery_type_id)
        .fetch_optional(&mut *tx)
        .await?;

        let battery_type = match battery_type {
            Some(t) => t,
            None => return Ok(RentalCreateOutcome::TypeNotFound),
        };

        if let Some(battery_id) = battery_id {
            let claimed = sqlx::query(
                r#"
                UPDATE batteries
                SET status = 'rented', updated_at = $3
                WHERE id = $1 AND battery_type_id = $2 AND status = 'available'
                "#,
            )
            .bind(battery_id)
            .bind(battery_type_id)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;

            if claimed.rows_affected() == 0 {
                return Ok(RentalCreateOutcome::BatteryUnavailable);
            }
        }

        let rental = sqlx::query_as::<_, RentalEntity>(&format!(
            r#"
            INSERT INTO battery_rentals
                (customer_id, battery_id, battery_type_id, price, delivery_fee, rented_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {RENTAL_COLUMNS}
            "#
        ))
        .bind(customer_id)
        .bind(battery_id)
        .bind(battery_type_id)
        .bind(battery_type.rental_price)
        .bind(battery_type.delivery_fee)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(RentalCreateOutcome::Created(rental))
    }

    /// Close a rental, stamping `returned_at` exactly once and flipping the
    /// attached unit back to available.
    pub async fn close(&self, rental_id: i64) -> Result<RentalReturnOutcome, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let rental = sqlx::query_as::<_, RentalEntity>(&format!(
            r#"
            UPDATE battery_rentals
            SET returned_at = $2
            WHERE id = $1 AND returned_at IS NULL
            RETURNING {RENTAL_COLUMNS}
            "#
        ))
        .bind(rental_id)
        .bind(Utc::now())
        .fetch_optional(&mut *tx)
        .await?;

        let rental = match rental {
            Some(rental) => rental,
            None => {
                // Distinguish a double return from a bad id.
                let exists: Option<(i64,)> =
                    sqlx::query_as("SELECT id FROM battery_rentals WHERE id = $1")
                        .bind(rental_id)
                        .fetch_optional(&mut *tx)
                        .await?;
                return Ok(if exists.is_some() {
                    RentalReturnOutcome::AlreadyReturned
                } else {
                    RentalReturnOutcome::NotFound
                });
            }
        };

        if let Some(battery_id) = rental.battery_id {
            sqlx::query(
                r#"
                UPDATE batteries
                SET status = 'available', updated_at = $2
                WHERE id = $1 AND status = 'rented'
                "#,
            )
            .bind(battery_id)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(RentalReturnOutcome::Returned(rental))
    }
}
