//! Application services.

pub mod photos;
