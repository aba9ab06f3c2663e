//! Health visit log domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One logged health visit. Free-text, immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HealthAccess {
    pub id: i64,
    pub customer_id: i64,
    pub symptoms: Option<String>,
    pub treatments: Option<String>,
    pub notes: Option<String>,
    pub visit_date: DateTime<Utc>,
}

/// Listing row: visit joined with the customer name.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HealthAccessWithName {
    pub id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub symptoms: Option<String>,
    pub treatments: Option<String>,
    pub notes: Option<String>,
    pub visit_date: DateTime<Utc>,
}

/// Request payload for logging a health visit.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateHealthAccessRequest {
    #[validate(range(min = 1, message = "customer_id must be a positive id"))]
    pub customer_id: i64,

    #[validate(length(max = 2000, message = "Symptoms must be at most 2000 characters"))]
    pub symptoms: Option<String>,

    #[validate(length(max = 2000, message = "Treatments must be at most 2000 characters"))]
    pub treatments: Option<String>,

    #[validate(length(max = 2000, message = "Notes must be at most 2000 characters"))]
    pub notes: Option<String>,

    /// Defaults to the current time when omitted.
    pub visit_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_validation() {
        let request = CreateHealthAccessRequest {
            customer_id: 1,
            symptoms: Some("fever".to_string()),
            treatments: Some("paracetamol".to_string()),
            notes: None,
            visit_date: None,
        };
        assert!(request.validate().is_ok());

        let bad = CreateHealthAccessRequest {
            customer_id: -1,
            symptoms: Some("x".repeat(2001)),
            ..request
        };
        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("customer_id"));
        assert!(errors.field_errors().contains_key("symptoms"));
    }
}
