//! Database entity definitions (row mappings).

pub mod battery;
pub mod customer;
pub mod health_access;
pub mod internet_access;
pub mod rental;
pub mod water_sale;

pub use battery::{
    BatteryCategoryDb, BatteryEntity, BatteryStatusDb, BatteryTypeEntity, BatteryWithTypeEntity,
};
pub use customer::CustomerEntity;
pub use health_access::{HealthAccessEntity, HealthAccessWithNameEntity};
pub use internet_access::{InternetAccessEntity, InternetAccessWithNameEntity, VoucherDurationDb};
pub use rental::{RentalEntity, RentalWithNamesEntity};
pub use water_sale::{WaterSaleEntity, WaterSaleWithNameEntity};
