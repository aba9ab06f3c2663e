//! Domain layer for the off-grid management backend.
//!
//! This crate contains:
//! - Domain models (Customer, Battery, BatteryRental, WaterSale,
//!   InternetAccess, HealthAccess)
//! - Request/response DTOs with validation
//! - Domain enums (battery status, voucher duration codes)

pub mod models;
