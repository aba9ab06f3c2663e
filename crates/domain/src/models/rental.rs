//! Battery rental domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One rental: either a physical unit loan or a type-only charging sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BatteryRental {
    pub id: i64,
    pub customer_id: i64,
    /// `None` for pure charging-service sales with no tracked unit.
    pub battery_id: Option<i64>,
    pub battery_type_id: i64,
    pub price: f64,
    pub delivery_fee: f64,
    pub rented_at: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
}

impl BatteryRental {
    /// An open rental has not been returned yet.
    pub fn is_open(&self) -> bool {
        self.returned_at.is_none()
    }
}

/// Listing row: rental joined with customer and catalog names.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RentalWithNames {
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

/// Request payload for creating a rental.
///
/// Price and delivery fee are copied from the catalog entry at creation
/// time, never taken from the client.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateRentalRequest {
    #[validate(range(min = 1, message = "customer_id must be a positive id"))]
    pub customer_id: i64,

    #[validate(range(min = 1, message = "battery_type_id must be a positive id"))]
    pub battery_type_id: i64,

    /// Physical unit to rent out; omit for a charging-service sale.
    pub battery_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_open() {
        let mut rental = BatteryRental {
            id: 1,
            customer_id: 1,
            battery_id: Some(3),
            battery_type_id: 2,
            price: 1000.0,
            delivery_fee: 0.0,
            rented_at: Utc::now(),
            returned_at: None,
        };
        assert!(rental.is_open());
        rental.returned_at = Some(Utc::now());
        assert!(!rental.is_open());
    }

    #[test]
    fn test_create_request_rejects_zero_ids() {
        let request = CreateRentalRequest {
            customer_id: 0,
            battery_type_id: 0,
            battery_id: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("customer_id"));
        assert!(errors.field_errors().contains_key("battery_type_id"));
    }
}
