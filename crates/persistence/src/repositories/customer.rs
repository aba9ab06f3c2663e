//! Customer repository for database operations.

use chrono::{NaiveDate, Utc};
use domain::models::PhotoKind;
use sqlx::PgPool;

use crate::entities::CustomerEntity;

const CUSTOMER_COLUMNS: &str = "id, first_name, middle_name, family_name, phone, address, city, \
     date_of_birth, city_of_birth, id_type, id_number, created_at, updated_at";

/// Profile fields written on create and update.
///
/// Mirrors the validated request DTO; kept separate so the repository does
/// not depend on HTTP-facing types.
#[derive(Debug, Clone)]
pub struct CustomerProfileRecord<'a> {
    pub first_name: &'a str,
    pub middle_name: Option<&'a str>,
    pub family_name: &'a str,
    pub phone: &'a str,
    pub address: Option<&'a str>,
    pub city: Option<&'a str>,
    pub date_of_birth: NaiveDate,
    pub city_of_birth: &'a str,
    pub id_type: &'a str,
    pub id_number: &'a str,
}

/// Optional photo blobs accompanying a create or update. `None` leaves the
/// stored photo untouched.
#[derive(Debug, Clone, Default)]
pub struct CustomerPhotoRecord {
    pub selfie: Option<Vec<u8>>,
    pub id_photo: Option<Vec<u8>>,
    pub bill_photo: Option<Vec<u8>>,
}

/// Repository for customer-related database operations.
#[derive(Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all customers, newest first. Photo columns are never selected.
    pub async fn list_all(&self) -> Result<Vec<CustomerEntity>, sqlx::Error> {
        sqlx::query_as::<_, CustomerEntity>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await
    }

    /// Find a customer by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<CustomerEntity>, sqlx::Error> {
        sqlx::query_as::<_, CustomerEntity>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Insert a new customer with optional KYC photos.
    ///
    /// A duplicate phone number surfaces as a unique-violation database
    /// error; the transaction never leaves a partial row behind.
    pub async fn create(
        &self,
        profile: CustomerProfileRecord<'_>,
        photos: CustomerPhotoRecord,
    ) -> Result<CustomerEntity, sqlx::Error> {
        sqlx::query_as::<_, CustomerEntity>(&format!(
            r#"
            INSERT INTO customers
                (first_name, middle_name, family_name, phone, address, city,
                 date_of_birth, city_of_birth, id_type, id_number,
                 selfie_photo, id_photo, bill_photo, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $14)
            RETURNING {CUSTOMER_COLUMNS}
            "#
        ))
        .bind(profile.first_name)
        .bind(profile.middle_name)
        .bind(profile.family_name)
        .bind(profile.phone)
        .bind(profile.address)
        .bind(profile.city)
        .bind(profile.date_of_birth)
        .bind(profile.city_of_birth)
        .bind(profile.id_type)
        .bind(profile.id_number)
        .bind(photos.selfie)
        .bind(photos.id_photo)
        .bind(photos.bill_photo)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
    }

    /// Full-field replace of profile fields; photos are replaced only when a
    /// new blob is supplied.
    ///
    /// Returns `None` when the customer does not exist.
    pub async fn update(
        &self,
        id: i64,
        profile: CustomerProfileRecord<'_>,
        photos: CustomerPhotoRecord,
    ) -> Result<Option<CustomerEntity>, sqlx::Error> {
        sqlx::query_as::<_, CustomerEntity>(&format!(
            r#"
            UPDATE customers SET
                first_name = $2,
                middle_name = $3,
                family_name = $4,
                phone = $5,
                address = $6,
                city = $7,
                date_of_birth = $8,
                city_of_birth = $9,
                id_type = $10,
                id_number = $11,
                selfie_photo = COALESCE($12, selfie_photo),
                id_photo = COALESCE($13, id_photo),
                bill_photo = COALESCE($14, bill_photo),
                updated_at = $15
            WHERE id = $1
            RETURNING {CUSTOMER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(profile.first_name)
        .bind(profile.middle_name)
        .bind(profile.family_name)
        .bind(profile.phone)
        .bind(profile.address)
        .bind(profile.city)
        .bind(profile.date_of_birth)
        .bind(profile.city_of_birth)
        .bind(profile.id_type)
        .bind(profile.id_number)
        .bind(photos.selfie)
        .bind(photos.id_photo)
        .bind(photos.bill_photo)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
    }

    /// Fetch one stored photo blob.
    ///
    /// Outer `None` means the customer does not exist; inner `None` means
    /// the customer has no photo of that kind.
    pub async fn find_photo(
        &self,
        id: i64,
        kind: PhotoKind,
    ) -> Result<Option<Option<Vec<u8>>>, sqlx::Error> {
        let column = match kind {
            PhotoKind::Selfie => "selfie_photo",
            PhotoKind::Id => "id_photo",
            PhotoKind::Bill => "bill_photo",
        };
        let row: Option<(Option<Vec<u8>>,)> =
            sqlx::query_as(&format!("SELECT {column} FROM customers WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|(blob,)| blob))
    }

    /// Number of registered customers. Used by the seeding guard.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }
}
