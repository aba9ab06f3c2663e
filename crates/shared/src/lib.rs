//! Shared utilities for the off-grid management backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Credential generation (WiFi voucher passwords)
//! - Common validation logic

pub mod passwords;
pub mod validation;
