//! Customer entity (database row mapping).

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database row mapping for the customers table, photo columns excluded.
///
/// Photo blobs are fetched separately by the photo endpoint so that list
/// queries never drag megabytes of image data through the pool.
#[derive(Debug, Clone, FromRow)]
pub struct CustomerEntity {
    pub id: i64,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub family_name: String,
    pub phone: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub date_of_birth: NaiveDate,
    pub city_of_birth: String,
    pub id_type: String,
    pub id_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CustomerEntity> for domain::models::Customer {
    fn from(entity: CustomerEntity) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            middle_name: entity.middle_name,
            family_name: entity.family_name,
            phone: entity.phone,
            address: entity.address,
            city: entity.city,
            date_of_birth: entity.date_of_birth,
            city_of_birth: entity.city_of_birth,
            id_type: entity.id_type,
            id_number: entity.id_number,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_entity_to_domain() {
        let now = Utc::now();
        let entity = CustomerEntity {
            id: 7,
            first_name: "Awa".to_string(),
            middle_name: None,
            family_name: "Diop".to_string(),
            phone: "771234567".to_string(),
            address: Some("123 Main St".to_string()),
            city: Some("Niodior".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            city_of_birth: "Dakar".to_string(),
            id_type: "national_id".to_string(),
            id_number: "SN-123456".to_string(),
            created_at: now,
            updated_at: now,
        };

        let customer: domain::models::Customer = entity.into();
        assert_eq!(customer.id, 7);
        assert_eq!(customer.full_name(), "Awa Diop");
        assert_eq!(customer.phone, "771234567");
    }
}
