//! Battery catalog and inventory domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Catalog category: a rentable physical battery product, or an on-site
/// phone-charging service with no tracked units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatteryCategory {
    Battery,
    Charging,
}

impl BatteryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BatteryCategory::Battery => "battery",
            BatteryCategory::Charging => "charging",
        }
    }
}

impl FromStr for BatteryCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "battery" => Ok(BatteryCategory::Battery),
            "charging" => Ok(BatteryCategory::Charging),
            _ => Err(format!("Invalid battery category: {}", s)),
        }
    }
}

impl fmt::Display for BatteryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of one physical battery unit.
///
/// `Rented` is owned by the rental flow; the inventory endpoint may only
/// toggle between `Available` and `Maintenance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatteryStatus {
    Available,
    Rented,
    Maintenance,
}

impl BatteryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BatteryStatus::Available => "available",
            BatteryStatus::Rented => "rented",
            BatteryStatus::Maintenance => "maintenance",
        }
    }
}

impl FromStr for BatteryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(BatteryStatus::Available),
            "rented" => Ok(BatteryStatus::Rented),
            "maintenance" => Ok(BatteryStatus::Maintenance),
            _ => Err(format!("Invalid battery status: {}", s)),
        }
    }
}

impl fmt::Display for BatteryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog entry: the rentable product, not a physical unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BatteryType {
    pub id: i64,
    pub name: String,
    pub category: BatteryCategory,
    pub capacity: Option<String>,
    pub rental_price: f64,
    pub delivery_fee: f64,
    pub created_at: DateTime<Utc>,
}

/// One physically tracked battery unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Battery {
    pub id: i64,
    pub battery_type_id: i64,
    pub unit_number: i32,
    pub status: BatteryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Inventory listing row: a unit joined with its catalog entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BatteryWithType {
    pub id: i64,
    pub battery_type_id: i64,
    pub type_name: String,
    pub capacity: Option<String>,
    pub unit_number: i32,
    pub status: BatteryStatus,
}

/// Request payload for creating a catalog entry.
///
/// For `category == battery`, `quantity` numbered units are bulk-created
/// alongside the entry.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateBatteryTypeRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    pub category: BatteryCategory,

    #[validate(length(max = 50, message = "Capacity must be at most 50 characters"))]
    pub capacity: Option<String>,

    #[validate(custom(function = "shared::validation::validate_amount"))]
    pub rental_price: f64,

    #[validate(custom(function = "shared::validation::validate_amount"))]
    #[serde(default)]
    pub delivery_fee: f64,

    #[validate(range(min = 0, max = 500, message = "Quantity must be between 0 and 500"))]
    #[serde(default)]
    pub quantity: i32,
}

/// Request payload for updating a battery unit's status.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UpdateBatteryRequest {
    pub status: BatteryStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            BatteryStatus::Available,
            BatteryStatus::Rented,
            BatteryStatus::Maintenance,
        ] {
            assert_eq!(status.as_str().parse::<BatteryStatus>().unwrap(), status);
        }
        assert!("broken".parse::<BatteryStatus>().is_err());
    }

    #[test]
    fn test_category_round_trip() {
        assert_eq!(
            "battery".parse::<BatteryCategory>().unwrap(),
            BatteryCategory::Battery
        );
        assert_eq!(
            "charging".parse::<BatteryCategory>().unwrap(),
            BatteryCategory::Charging
        );
        assert!("solar".parse::<BatteryCategory>().is_err());
    }

    #[test]
    fn test_status_serde_rename() {
        let json = serde_json::to_string(&BatteryStatus::Maintenance).unwrap();
        assert_eq!(json, "\"maintenance\"");
        let status: BatteryStatus = serde_json::from_str("\"available\"").unwrap();
        assert_eq!(status, BatteryStatus::Available);
    }

    #[test]
    fn test_create_request_validation() {
        let request = CreateBatteryTypeRequest {
            name: "200wh Anker".to_string(),
            category: BatteryCategory::Battery,
            capacity: Some("200wh".to_string()),
            rental_price: 1000.0,
            delivery_fee: 200.0,
            quantity: 5,
        };
        assert!(request.validate().is_ok());

        let bad = CreateBatteryTypeRequest {
            name: String::new(),
            rental_price: -5.0,
            ..request
        };
        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("rental_price"));
    }
}
