//! Customer registration, profile, and KYC photo routes.

use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use domain::models::customer::{CreateCustomerResponse, CustomerProfile};
use domain::models::{Customer, PhotoKind};
use persistence::repositories::{CustomerPhotoRecord, CustomerProfileRecord, CustomerRepository};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::{validation_details_from, ApiError, ValidationDetail};
use crate::services::photos;

/// Multipart form body: text fields plus up to three photo file parts.
#[derive(Default)]
struct CustomerForm {
    fields: std::collections::HashMap<String, String>,
    photos: CustomerPhotoRecord,
}

/// Reads the whole multipart body into memory.
///
/// Photo parts are normalized to JPEG where possible; a file part over the
/// size cap fails the request.
async fn read_form(mut multipart: Multipart) -> Result<CustomerForm, ApiError> {
    let mut form = CustomerForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let Some(name) = field.name().map(|s| s.to_string()) else {
            continue;
        };

        let photo_slot = match name.as_str() {
            "selfie_photo" => Some(PhotoKind::Selfie),
            "id_photo" => Some(PhotoKind::Id),
            "bill_photo" => Some(PhotoKind::Bill),
            _ => None,
        };

        if let Some(kind) = photo_slot {
            // An empty filename means the form's file input was left blank.
            if field.file_name().map(str::is_empty).unwrap_or(true) {
                continue;
            }
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::Validation(format!("Failed to read {name}: {e}")))?
                .to_vec();
            if data.is_empty() {
                continue;
            }
            if data.len() > photos::MAX_PHOTO_SIZE {
                return Err(ApiError::Validation(format!(
                    "{name} exceeds the {}MB photo limit",
                    photos::MAX_PHOTO_SIZE / (1024 * 1024)
                )));
            }
            let normalized = photos::normalize_photo(data);
            match kind {
                PhotoKind::Selfie => form.photos.selfie = Some(normalized),
                PhotoKind::Id => form.photos.id_photo = Some(normalized),
                PhotoKind::Bill => form.photos.bill_photo = Some(normalized),
            }
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| ApiError::Validation(format!("Failed to read {name}: {e}")))?;
            form.fields.insert(name, value);
        }
    }

    Ok(form)
}

/// Builds a validated profile from the form fields, reporting every missing
/// or invalid field in one pass.
fn build_profile(form: &CustomerForm) -> Result<CustomerProfile, ApiError> {
    let mut details: Vec<ValidationDetail> = Vec::new();

    let mut require = |field: &str| -> String {
        match form.fields.get(field).filter(|v| !v.trim().is_empty()) {
            Some(value) => value.trim().to_string(),
            None => {
                details.push(ValidationDetail {
                    field: field.to_string(),
                    message: format!("Missing required field: {field}"),
                });
                String::new()
            }
        }
    };

    let first_name = require("first_name");
    let family_name = require("family_name");
    let phone = require("phone");
    let date_of_birth_raw = require("date_of_birth");
    let city_of_birth = require("city_of_birth");
    let id_type = require("id_type");
    let id_number = require("id_number");

    let optional = |field: &str| -> Option<String> {
        form.fields
            .get(field)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let date_of_birth = if date_of_birth_raw.is_empty() {
        NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or_default()
    } else {
        match NaiveDate::parse_from_str(&date_of_birth_raw, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                details.push(ValidationDetail {
                    field: "date_of_birth".to_string(),
                    message: "date_of_birth must be formatted YYYY-MM-DD".to_string(),
                });
                NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or_default()
            }
        }
    };

    let profile = CustomerProfile {
        first_name,
        middle_name: optional("middle_name"),
        family_name,
        phone,
        address: optional("address"),
        city: optional("city"),
        date_of_birth,
        city_of_birth,
        id_type,
        id_number,
    };

    // Merge format errors with the missing/unparseable ones so the client
    // sees every problem in a single response. Fields already reported are
    // skipped; their placeholder values would fail the format checks too.
    if let Err(errors) = profile.validate() {
        for detail in validation_details_from(&errors) {
            if !details.iter().any(|d| d.field == detail.field) {
                details.push(detail);
            }
        }
    }

    if details.is_empty() {
        Ok(profile)
    } else {
        Err(ApiError::ValidationDetails(details))
    }
}

fn profile_record(profile: &CustomerProfile) -> CustomerProfileRecord<'_> {
    CustomerProfileRecord {
        first_name: &profile.first_name,
        middle_name: profile.middle_name.as_deref(),
        family_name: &profile.family_name,
        phone: &profile.phone,
        address: profile.address.as_deref(),
        city: profile.city.as_deref(),
        date_of_birth: profile.date_of_birth,
        city_of_birth: &profile.city_of_birth,
        id_type: &profile.id_type,
        id_number: &profile.id_number,
    }
}

/// List all customers.
///
/// GET /api/customers
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    let repo = CustomerRepository::new(state.pool.clone());
    let customers: Vec<Customer> = repo
        .list_all()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    info!(count = customers.len(), "Listed customers");
    Ok(Json(customers))
}

/// Get one customer.
///
/// GET /api/customers/:customer_id
pub async fn get_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<i64>,
) -> Result<Json<Customer>, ApiError> {
    let repo = CustomerRepository::new(state.pool.clone());
    let customer = repo
        .find_by_id(customer_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Customer {customer_id} not found")))?;

    Ok(Json(customer.into()))
}

/// Register a customer from a multipart form with optional KYC photos.
///
/// POST /api/customers
pub async fn create_customer(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<CreateCustomerResponse>), ApiError> {
    let form = read_form(multipart).await?;
    let profile = build_profile(&form)?;

    let repo = CustomerRepository::new(state.pool.clone());
    let customer = repo.create(profile_record(&profile), form.photos).await?;

    info!(customer_id = customer.id, "Customer created");

    Ok((
        StatusCode::CREATED,
        Json(CreateCustomerResponse {
            message: "Customer created successfully".to_string(),
            customer_id: customer.id,
        }),
    ))
}

/// Full-field profile replace; photos change only when a new file part is
/// present.
///
/// PUT /api/customers/:customer_id
pub async fn update_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<i64>,
    multipart: Multipart,
) -> Result<Json<Customer>, ApiError> {
    let form = read_form(multipart).await?;
    let profile = build_profile(&form)?;

    let repo = CustomerRepository::new(state.pool.clone());
    let customer = repo
        .update(customer_id, profile_record(&profile), form.photos)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Customer {customer_id} not found")))?;

    info!(customer_id = customer.id, "Customer updated");
    Ok(Json(customer.into()))
}

/// Stream one stored KYC photo with a sniffed MIME type.
///
/// GET /api/customers/:customer_id/photos/:kind
pub async fn get_customer_photo(
    State(state): State<AppState>,
    Path((customer_id, kind)): Path<(i64, String)>,
) -> Result<Response, ApiError> {
    let kind: PhotoKind = kind
        .parse()
        .map_err(|_| ApiError::Validation("Photo kind must be selfie, id, or bill".to_string()))?;

    let repo = CustomerRepository::new(state.pool.clone());
    let blob = repo
        .find_photo(customer_id, kind)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Customer {customer_id} not found")))?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Customer {customer_id} has no {kind} photo"))
        })?;

    let mime = photos::sniff_mime(&blob);
    Ok(([(header::CONTENT_TYPE, mime)], blob).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(fields: &[(&str, &str)]) -> CustomerForm {
        CustomerForm {
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            photos: CustomerPhotoRecord::default(),
        }
    }

    fn complete_form() -> CustomerForm {
        form_with(&[
            ("first_name", "Awa"),
            ("family_name", "Diop"),
            ("phone", "771234567"),
            ("date_of_birth", "1990-04-12"),
            ("city_of_birth", "Dakar"),
            ("id_type", "national_id"),
            ("id_number", "SN-123456"),
        ])
    }

    #[test]
    fn test_build_profile_complete() {
        let profile = build_profile(&complete_form()).unwrap();
        assert_eq!(profile.first_name, "Awa");
        assert_eq!(
            profile.date_of_birth,
            NaiveDate::from_ymd_opt(1990, 4, 12).unwrap()
        );
        assert_eq!(profile.middle_name, None);
    }

    #[test]
    fn test_build_profile_reports_all_missing_fields() {
        let form = form_with(&[("first_name", "Awa")]);
        let err = build_profile(&form).unwrap_err();
        match err {
            ApiError::ValidationDetails(details) => {
                // family_name, phone, date_of_birth, city_of_birth, id_type, id_number
                assert_eq!(details.len(), 6);
                assert!(details.iter().any(|d| d.field == "phone"));
                assert!(details.iter().any(|d| d.field == "date_of_birth"));
            }
            other => panic!("Expected ValidationDetails, got {other:?}"),
        }
    }

    #[test]
    fn test_build_profile_merges_missing_and_invalid_fields() {
        // Missing fields and a present-but-malformed phone arrive in the
        // same response, one detail per field.
        let form = form_with(&[("first_name", "Awa"), ("phone", "abcdef")]);
        let err = build_profile(&form).unwrap_err();
        match err {
            ApiError::ValidationDetails(details) => {
                assert_eq!(details.len(), 6);
                let phone = details.iter().find(|d| d.field == "phone").unwrap();
                assert!(phone.message.contains("digits"));
                assert!(details.iter().any(|d| d.field == "family_name"));
            }
            other => panic!("Expected ValidationDetails, got {other:?}"),
        }
    }

    #[test]
    fn test_build_profile_rejects_bad_date() {
        let mut form = complete_form();
        form.fields
            .insert("date_of_birth".to_string(), "12/04/1990".to_string());
        let err = build_profile(&form).unwrap_err();
        match err {
            ApiError::ValidationDetails(details) => {
                assert_eq!(details.len(), 1);
                assert_eq!(details[0].field, "date_of_birth");
            }
            other => panic!("Expected ValidationDetails, got {other:?}"),
        }
    }

    #[test]
    fn test_build_profile_rejects_bad_phone_format() {
        let mut form = complete_form();
        form.fields
            .insert("phone".to_string(), "abcdef".to_string());
        assert!(build_profile(&form).is_err());
    }

    #[test]
    fn test_optional_blank_fields_become_none() {
        let mut form = complete_form();
        form.fields.insert("middle_name".to_string(), "  ".to_string());
        let profile = build_profile(&form).unwrap();
        assert_eq!(profile.middle_name, None);
    }
}
