//! Battery catalog and inventory entities (database row mappings).

use chrono::{DateTime, Utc};
use domain::models::{BatteryCategory, BatteryStatus};
use sqlx::FromRow;

/// Database enum mapping for the battery_category PostgreSQL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "battery_category", rename_all = "lowercase")]
pub enum BatteryCategoryDb {
    Battery,
    Charging,
}

impl From<BatteryCategoryDb> for BatteryCategory {
    fn from(db: BatteryCategoryDb) -> Self {
        match db {
            BatteryCategoryDb::Battery => BatteryCategory::Battery,
            BatteryCategoryDb::Charging => BatteryCategory::Charging,
        }
    }
}

impl From<BatteryCategory> for BatteryCategoryDb {
    fn from(category: BatteryCategory) -> Self {
        match category {
            BatteryCategory::Battery => BatteryCategoryDb::Battery,
            BatteryCategory::Charging => BatteryCategoryDb::Charging,
        }
    }
}

/// Database enum mapping for the battery_status PostgreSQL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "battery_status", rename_all = "lowercase")]
pub enum BatteryStatusDb {
    Available,
    Rented,
    Maintenance,
}

impl From<BatteryStatusDb> for BatteryStatus {
    fn from(db: BatteryStatusDb) -> Self {
        match db {
            BatteryStatusDb::Available => BatteryStatus::Available,
            BatteryStatusDb::Rented => BatteryStatus::Rented,
            BatteryStatusDb::Maintenance => BatteryStatus::Maintenance,
        }
    }
}

impl From<BatteryStatus> for BatteryStatusDb {
    fn from(status: BatteryStatus) -> Self {
        match status {
            BatteryStatus::Available => BatteryStatusDb::Available,
            BatteryStatus::Rented => BatteryStatusDb::Rented,
            BatteryStatus::Maintenance => BatteryStatusDb::Maintenance,
        }
    }
}

/// Database row mapping for the battery_types table.
#[derive(Debug, Clone, FromRow)]
pub struct BatteryTypeEntity {
    pub id: i64,
    pub name: String,
    pub category: BatteryCategoryDb,
    pub capacity: Option<String>,
    pub rental_price: f64,
    pub delivery_fee: f64,
    pub created_at: DateTime<Utc>,
}

impl From<BatteryTypeEntity> for domain::models::BatteryType {
    fn from(entity: BatteryTypeEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            category: entity.category.into(),
            capacity: entity.capacity,
            rental_price: entity.rental_price,
            delivery_fee: entity.delivery_fee,
            created_at: entity.created_at,
        }
    }
}

/// Database row mapping for the batteries table.
#[derive(Debug, Clone, FromRow)]
pub struct BatteryEntity {
    pub id: i64,
    pub battery_type_id: i64,
    pub unit_number: i32,
    pub status: BatteryStatusDb,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BatteryEntity> for domain::models::Battery {
    fn from(entity: BatteryEntity) -> Self {
        Self {
            id: entity.id,
            battery_type_id: entity.battery_type_id,
            unit_number: entity.unit_number,
            status: entity.status.into(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Inventory listing row: battery joined with its catalog entry.
#[derive(Debug, Clone, FromRow)]
pub struct BatteryWithTypeEntity {
    pub id: i64,
    pub battery_type_id: i64,
    pub type_name: String,
    pub capacity: Option<String>,
    pub unit_number: i32,
    pub status: BatteryStatusDb,
}

impl From<BatteryWithTypeEntity> for domain::models::battery::BatteryWithType {
    fn from(entity: BatteryWithTypeEntity) -> Self {
        Self {
            id: entity.id,
            battery_type_id: entity.battery_type_id,
            type_name: entity.type_name,
            capacity: entity.capacity,
            unit_number: entity.unit_number,
            status: entity.status.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_db_round_trip() {
        for status in [
            BatteryStatus::Available,
            BatteryStatus::Rented,
            BatteryStatus::Maintenance,
        ] {
            let db: BatteryStatusDb = status.into();
            let back: BatteryStatus = db.into();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn test_battery_entity_to_domain() {
        let now = Utc::now();
        let entity = BatteryEntity {
            id: 4,
            battery_type_id: 2,
            unit_number: 3,
            status: BatteryStatusDb::Rented,
            created_at: now,
            updated_at: now,
        };
        let battery: domain::models::Battery = entity.into();
        assert_eq!(battery.status, BatteryStatus::Rented);
        assert_eq!(battery.unit_number, 3);
    }
}
