//! Water sale entities (database row mappings).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the water_sales table.
#[derive(Debug, Clone, FromRow)]
pub struct WaterSaleEntity {
    pub id: i64,
    pub customer_id: i64,
    pub size: f64,
    pub price: f64,
    pub sold_at: DateTime<Utc>,
}

impl From<WaterSaleEntity> for domain::models::WaterSale {
    fn from(entity: WaterSaleEntity) -> Self {
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            size: entity.size,
            price: entity.price,
            sold_at: entity.sold_at,
        }
    }
}

/// Listing row: sale joined with the customer name.
#[derive(Debug, Clone, FromRow)]
pub struct WaterSaleWithNameEntity {
    pub id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub size: f64,
    pub price: f64,
    pub sold_at: DateTime<Utc>,
}

impl From<WaterSaleWithNameEntity> for domain::models::water_sale::WaterSaleWithName {
    fn from(entity: WaterSaleWithNameEntity) -> Self {
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            customer_name: entity.customer_name,
            size: entity.size,
            price: entity.price,
            sold_at: entity.sold_at,
        }
    }
}
