//! Health visit repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::entities::{HealthAccessEntity, HealthAccessWithNameEntity};

/// Repository for health visit log operations.
#[derive(Clone)]
pub struct HealthAccessRepository {
    pool: PgPool,
}

impl HealthAccessRepository {
    /// Creates a new HealthAccessRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List visits with customer names, most recent visit first.
    pub async fn list_with_names(&self) -> Result<Vec<HealthAccessWithNameEntity>, sqlx::Error> {
        sqlx::query_as::<_, HealthAccessWithNameEntity>(
            r#"
            SELECT h.id, h.customer_id,
                   c.first_name || ' ' || c.family_name AS customer_name,
                   h.symptoms, h.treatments, h.notes, h.visit_date
            FROM health_access h
            JOIN customers c ON c.id = h.customer_id
            ORDER BY h.visit_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Find a visit by id, joined with the customer name.
    pub async fn find_by_id(
        &self,
        id: i64,
    ) -> Result<Option<HealthAccessWithNameEntity>, sqlx::Error> {
        sqlx::query_as::<_, HealthAccessWithNameEntity>(
            r#"
            SELECT h.id, h.customer_id,
                   c.first_name || ' ' || c.family_name AS customer_name,
                   h.symptoms, h.treatments, h.notes, h.visit_date
            FROM health_access h
            JOIN customers c ON c.id = h.customer_id
            WHERE h.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Log a visit.
    pub async fn create(
        &self,
        customer_id: i64,
        symptoms: Option<&str>,
        treatments: Option<&str>,
        notes: Option<&str>,
        visit_date: Option<DateTime<Utc>>,
    ) -> Result<HealthAccessEntity, sqlx::Error> {
        sqlx::query_as::<_, HealthAccessEntity>(
            r#"
            INSERT INTO health_access (customer_id, symptoms, treatments, notes, visit_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, customer_id, symptoms, treatments, notes, visit_date
            "#,
        )
        .bind(customer_id)
        .bind(symptoms)
        .bind(treatments)
        .bind(notes)
        .bind(visit_date.unwrap_or_else(Utc::now))
        .fetch_one(&self.pool)
        .await
    }
}
