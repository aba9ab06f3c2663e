//! HTTP route handlers.

pub mod batteries;
pub mod battery_types;
pub mod customers;
pub mod dashboard;
pub mod frontend;
pub mod health;
pub mod health_access;
pub mod internet_access;
pub mod rentals;
pub mod water_sales;
