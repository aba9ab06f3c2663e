//! Repository implementations for database operations.

pub mod battery;
pub mod customer;
pub mod dashboard;
pub mod health_access;
pub mod internet_access;
pub mod rental;
pub mod water_sale;

pub use battery::{BatteryDeleteOutcome, BatteryRepository};
pub use customer::{CustomerPhotoRecord, CustomerProfileRecord, CustomerRepository};
pub use dashboard::DashboardRepository;
pub use health_access::HealthAccessRepository;
pub use internet_access::InternetAccessRepository;
pub use rental::{RentalCreateOutcome, RentalRepository, RentalReturnOutcome};
pub use water_sale::WaterSaleRepository;
