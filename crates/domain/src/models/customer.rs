//! Customer domain models and registration DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// A registered customer with KYC details.
///
/// Photo blobs are deliberately absent here; they are streamed through the
/// dedicated photo endpoint and never serialized into list/detail responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Customer {
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

impl Customer {
    /// Display name used when embedding the customer into transaction rows.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.family_name)
    }
}

/// Which of the three stored KYC photos is addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoKind {
    Selfie,
    Id,
    Bill,
}

impl PhotoKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhotoKind::Selfie => "selfie",
            PhotoKind::Id => "id",
            PhotoKind::Bill => "bill",
        }
    }

    /// Multipart field name carrying this photo on create/update.
    pub fn field_name(&self) -> &'static str {
        match self {
            PhotoKind::Selfie => "selfie_photo",
            PhotoKind::Id => "id_photo",
            PhotoKind::Bill => "bill_photo",
        }
    }
}

impl FromStr for PhotoKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "selfie" => Ok(PhotoKind::Selfie),
            "id" => Ok(PhotoKind::Id),
            "bill" => Ok(PhotoKind::Bill),
            _ => Err(format!("Invalid photo kind: {}", s)),
        }
    }
}

impl fmt::Display for PhotoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Profile fields accepted on customer create and update.
///
/// Built from the multipart form body; date_of_birth arrives as a
/// `YYYY-MM-DD` string and is parsed before this struct exists.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CustomerProfile {
    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    pub first_name: String,

    #[validate(length(max = 50, message = "Middle name must be at most 50 characters"))]
    pub middle_name: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Family name must be 1-50 characters"))]
    pub family_name: String,

    #[validate(custom(function = "shared::validation::validate_phone"))]
    pub phone: String,

    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    pub address: Option<String>,

    #[validate(length(max = 100, message = "City must be at most 100 characters"))]
    pub city: Option<String>,

    pub date_of_birth: NaiveDate,

    #[validate(length(min = 1, max = 100, message = "City of birth must be 1-100 characters"))]
    pub city_of_birth: String,

    #[validate(length(min = 1, max = 50, message = "ID type must be 1-50 characters"))]
    pub id_type: String,

    #[validate(length(min = 1, max = 50, message = "ID number must be 1-50 characters"))]
    pub id_number: String,
}

/// Response for a successful customer creation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateCustomerResponse {
    pub message: String,
    pub customer_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> CustomerProfile {
        CustomerProfile {
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
        }
    }

    #[test]
    fn test_valid_profile() {
        assert!(profile().validate().is_ok());
    }

    #[test]
    fn test_profile_rejects_empty_names() {
        let mut p = profile();
        p.first_name = String::new();
        p.family_name = String::new();
        let errors = p.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
        assert!(errors.field_errors().contains_key("family_name"));
    }

    #[test]
    fn test_profile_rejects_bad_phone() {
        let mut p = profile();
        p.phone = "not-a-phone".to_string();
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_photo_kind_round_trip() {
        for kind in [PhotoKind::Selfie, PhotoKind::Id, PhotoKind::Bill] {
            assert_eq!(kind.as_str().parse::<PhotoKind>().unwrap(), kind);
        }
        assert!("passport".parse::<PhotoKind>().is_err());
    }

    #[test]
    fn test_full_name() {
        let customer = Customer {
            id: 1,
            first_name: "Awa".to_string(),
            middle_name: Some("Fatou".to_string()),
            family_name: "Diop".to_string(),
            phone: "771234567".to_string(),
            address: None,
            city: None,
            date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            city_of_birth: "Dakar".to_string(),
            id_type: "national_id".to_string(),
            id_number: "SN-123456".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(customer.full_name(), "Awa Diop");
    }
}
