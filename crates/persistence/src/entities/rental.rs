//! Battery rental entities (database row mappings).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the battery_rentals table.
#[derive(Debug, Clone, FromRow)]
pub struct RentalEntity {
    pub id: i64,
    pub customer_id: i64,
    pub battery_id: Option<i64>,
    pub battery_type_id: i64,
    pub price: f64,
    pub delivery_fee: f64,
    pub rented_at: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
}

impl From<RentalEntity> for domain::models::BatteryRental {
    fn from(entity: RentalEntity) -> Self {
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            battery_id: entity.battery_id,
            battery_type_id: entity.battery_type_id,
            price: entity.price,
            delivery_fee: entity.delivery_fee,
            rented_at: entity.rented_at,
            returned_at: entity.returned_at,
        }
    }
}

/// Listing row: rental joined with customer and catalog names.
#[derive(Debug, Clone, FromRow)]
pub struct RentalWithNamesEntity {
    pub id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub battery_id: Option<i64>,
    pub unit_number: Option<i32>,
    pub battery_type: String,
    pub price: f64,
    pub delivery_fee: f64,
    pub rented_at: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
}

impl From<RentalWithNamesEntity> for domain::models::rental::RentalWithNames {
    fn from(entity: RentalWithNamesEntity) -> Self {
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            customer_name: entity.customer_name,
            battery_id: entity.battery_id,
            unit_number: entity.unit_number,
            battery_type: entity.battery_type,
            price: entity.price,
            delivery_fee: entity.delivery_fee,
            rented_at: entity.rented_at,
            returned_at: entity.returned_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rental_entity_to_domain() {
        let entity = RentalEntity {
            id: 9,
            customer_id: 2,
            battery_id: None,
            battery_type_id: 1,
            price: 250.0,
            delivery_fee: 0.0,
            rented_at: Utc::now(),
            returned_at: None,
        };
        let rental: domain::models::BatteryRental = entity.into();
        assert!(rental.is_open());
        assert_eq!(rental.battery_id, None);
    }
}
