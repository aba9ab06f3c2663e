//! Domain models for the off-grid management backend.

pub mod battery;
pub mod customer;
pub mod dashboard;
pub mod health_access;
pub mod internet_access;
pub mod rental;
pub mod water_sale;

pub use battery::{Battery, BatteryCategory, BatteryStatus, BatteryType};
pub use customer::{Customer, PhotoKind};
pub use dashboard::DashboardStats;
pub use health_access::HealthAccess;
pub use internet_access::{DurationType, InternetAccess};
pub use rental::BatteryRental;
pub use water_sale::WaterSale;
