//! Water sale domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One water sale. Immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WaterSale {
    pub id: i64,
    pub customer_id: i64,
    /// Container size in liters.
    pub size: f64,
    pub price: f64,
    pub sold_at: DateTime<Utc>,
}

/// Listing row: sale joined with the customer name.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct WaterSaleWithName {
    pub id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub size: f64,
    pub price: f64,
    pub sold_at: DateTime<Utc>,
}

/// Request payload for recording a water sale.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateWaterSaleRequest {
    #[validate(range(min = 1, message = "customer_id must be a positive id"))]
    pub customer_id: i64,

    #[validate(custom(function = "shared::validation::validate_size"))]
    pub size: f64,

    #[validate(custom(function = "shared::validation::validate_amount"))]
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_validation() {
        let request = CreateWaterSaleRequest {
            customer_id: 1,
            size: 1.5,
            price: 100.0,
        };
        assert!(request.validate().is_ok());

        let bad = CreateWaterSaleRequest {
            customer_id: 0,
            size: 0.0,
            price: -1.0,
        };
        let errors = bad.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 3);
    }
}
