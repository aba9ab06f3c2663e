//! Health visit entities (database row mappings).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the health_access table.
#[derive(Debug, Clone, FromRow)]
pub struct HealthAccessEntity {
    pub id: i64,
    pub customer_id: i64,
    pub symptoms: Option<String>,
    pub treatments: Option<String>,
    pub notes: Option<String>,
    pub visit_date: DateTime<Utc>,
}

impl From<HealthAccessEntity> for domain::models::HealthAccess {
    fn from(entity: HealthAccessEntity) -> Self {
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            symptoms: entity.symptoms,
            treatments: entity.treatments,
            notes: entity.notes,
            visit_date: entity.visit_date,
        }
    }
}

/// Listing row: visit joined with the customer name.
#[derive(Debug, Clone, FromRow)]
pub struct HealthAccessWithNameEntity {
    pub id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub symptoms: Option<String>,
    pub treatments: Option<String>,
    pub notes: Option<String>,
    pub visit_date: DateTime<Utc>,
}

impl From<HealthAccessWithNameEntity> for domain::models::health_access::HealthAccessWithName {
    fn from(entity: HealthAccessWithNameEntity) -> Self {
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            customer_name: entity.customer_name,
            symptoms: entity.symptoms,
            treatments: entity.treatments,
            notes: entity.notes,
            visit_date: entity.visit_date,
        }
    }
}
