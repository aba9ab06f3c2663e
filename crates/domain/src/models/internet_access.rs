//! Internet-access voucher domain models.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Fixed voucher duration codes sold at the kiosk.
///
/// An unrecognized code never reaches handler logic; it fails enum
/// deserialization at the request boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationType {
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "3d")]
    ThreeDays,
    #[serde(rename = "1w")]
    Week,
    #[serde(rename = "1m")]
    Month,
}

impl DurationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationType::Day => "24h",
            DurationType::ThreeDays => "3d",
            DurationType::Week => "1w",
            DurationType::Month => "1m",
        }
    }

    /// Voucher validity as an exact duration. `1m` is a flat 30 days.
    pub fn duration(&self) -> Duration {
        match self {
            DurationType::Day => Duration::hours(24),
            DurationType::ThreeDays => Duration::days(3),
            DurationType::Week => Duration::days(7),
            DurationType::Month => Duration::days(30),
        }
    }

    /// Expiry instant for a voucher purchased at `purchased_at`.
    pub fn expires_at(&self, purchased_at: DateTime<Utc>) -> DateTime<Utc> {
        purchased_at + self.duration()
    }
}

impl FromStr for DurationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "24h" => Ok(DurationType::Day),
            "3d" => Ok(DurationType::ThreeDays),
            "1w" => Ok(DurationType::Week),
            "1m" => Ok(DurationType::Month),
            _ => Err(format!("Invalid duration type: {}", s)),
        }
    }
}

impl fmt::Display for DurationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One sold WiFi voucher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct InternetAccess {
    pub id: i64,
    pub customer_id: i64,
    pub wifi_password: String,
    pub duration_type: DurationType,
    pub price: f64,
    pub purchased_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl InternetAccess {
    /// Expiry is a read-time comparison, never a stored state transition.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}

/// Listing row: voucher joined with the customer name plus derived status.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct InternetAccessWithName {
    pub id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub wifi_password: String,
    pub duration_type: DurationType,
    pub price: f64,
    pub purchased_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub expired: bool,
}

/// Request payload for selling a voucher.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateInternetAccessRequest {
    #[validate(range(min = 1, message = "customer_id must be a positive id"))]
    pub customer_id: i64,

    pub duration_type: DurationType,

    #[validate(custom(function = "shared::validation::validate_amount"))]
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_duration_code_round_trip() {
        for code in ["24h", "3d", "1w", "1m"] {
            assert_eq!(code.parse::<DurationType>().unwrap().as_str(), code);
        }
        assert!("2w".parse::<DurationType>().is_err());
    }

    #[test]
    fn test_serde_rejects_unknown_code() {
        let result: Result<DurationType, _> = serde_json::from_str("\"48h\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_expiry_arithmetic_is_exact() {
        let purchased = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(
            DurationType::Day.expires_at(purchased),
            purchased + Duration::hours(24)
        );
        assert_eq!(
            DurationType::ThreeDays.expires_at(purchased),
            purchased + Duration::days(3)
        );
        assert_eq!(
            DurationType::Week.expires_at(purchased),
            purchased + Duration::days(7)
        );
        assert_eq!(
            DurationType::Month.expires_at(purchased),
            purchased + Duration::days(30)
        );
    }

    #[test]
    fn test_is_expired_boundary() {
        let purchased = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let access = InternetAccess {
            id: 1,
            customer_id: 1,
            wifi_password: "abc123XYZ0".to_string(),
            duration_type: DurationType::Day,
            price: 500.0,
            purchased_at: purchased,
            expires_at: DurationType::Day.expires_at(purchased),
        };
        // Exactly at the expiry instant the voucher is still valid.
        assert!(!access.is_expired(access.expires_at));
        assert!(access.is_expired(access.expires_at + Duration::seconds(1)));
        assert!(!access.is_expired(purchased));
    }
}
