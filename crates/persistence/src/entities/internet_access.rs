//! Internet-access voucher entities (database row mappings).

use chrono::{DateTime, Utc};
use domain::models::DurationType;
use sqlx::FromRow;

/// Database enum mapping for the voucher_duration PostgreSQL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "voucher_duration")]
pub enum VoucherDurationDb {
    #[sqlx(rename = "24h")]
    Day,
    #[sqlx(rename = "3d")]
    ThreeDays,
    #[sqlx(rename = "1w")]
    Week,
    #[sqlx(rename = "1m")]
    Month,
}

impl From<VoucherDurationDb> for DurationType {
    fn from(db: VoucherDurationDb) -> Self {
        match db {
            VoucherDurationDb::Day => DurationType::Day,
            VoucherDurationDb::ThreeDays => DurationType::ThreeDays,
            VoucherDurationDb::Week => DurationType::Week,
            VoucherDurationDb::Month => DurationType::Month,
        }
    }
}

impl From<DurationType> for VoucherDurationDb {
    fn from(duration: DurationType) -> Self {
        match duration {
            DurationType::Day => VoucherDurationDb::Day,
            DurationType::ThreeDays => VoucherDurationDb::ThreeDays,
            DurationType::Week => VoucherDurationDb::Week,
            DurationType::Month => VoucherDurationDb::Month,
        }
    }
}

/// Database row mapping for the internet_access table.
#[derive(Debug, Clone, FromRow)]
pub struct InternetAccessEntity {
    pub id: i64,
    pub customer_id: i64,
    pub wifi_password: String,
    pub duration_type: VoucherDurationDb,
    pub price: f64,
    pub purchased_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl From<InternetAccessEntity> for domain::models::InternetAccess {
    fn from(entity: InternetAccessEntity) -> Self {
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            wifi_password: entity.wifi_password,
            duration_type: entity.duration_type.into(),
            price: entity.price,
            purchased_at: entity.purchased_at,
            expires_at: entity.expires_at,
        }
    }
}

/// Listing row: voucher joined with the customer name.
#[derive(Debug, Clone, FromRow)]
pub struct InternetAccessWithNameEntity {
    pub id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub wifi_password: String,
    pub duration_type: VoucherDurationDb,
    pub price: f64,
    pub purchased_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl InternetAccessWithNameEntity {
    /// Converts into the response DTO, deriving the expired flag at `now`.
    pub fn into_with_status(
        self,
        now: DateTime<Utc>,
    ) -> domain::models::internet_access::InternetAccessWithName {
        domain::models::internet_access::InternetAccessWithName {
            id: self.id,
            customer_id: self.customer_id,
            customer_name: self.customer_name,
            wifi_password: self.wifi_password,
            duration_type: self.duration_type.into(),
            price: self.price,
            purchased_at: self.purchased_at,
            expires_at: self.expires_at,
            expired: self.expires_at < now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_duration_db_round_trip() {
        for duration in [
            DurationType::Day,
            DurationType::ThreeDays,
            DurationType::Week,
            DurationType::Month,
        ] {
            let db: VoucherDurationDb = duration.into();
            let back: DurationType = db.into();
            assert_eq!(back, duration);
        }
    }

    #[test]
    fn test_into_with_status_derives_expired() {
        let now = Utc::now();
        let entity = InternetAccessWithNameEntity {
            id: 1,
            customer_id: 1,
            customer_name: "Awa Diop".to_string(),
            wifi_password: "abc123XYZ0".to_string(),
            duration_type: VoucherDurationDb::Day,
            price: 500.0,
            purchased_at: now - Duration::hours(25),
            expires_at: now - Duration::hours(1),
        };
        assert!(entity.clone().into_with_status(now).expired);

        let fresh = InternetAccessWithNameEntity {
            expires_at: now + Duration::hours(1),
            ..entity
        };
        assert!(!fresh.into_with_status(now).expired);
    }
}
