//! Persistence layer for the off-grid management backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations
//! - Versioned schema migrations and startup seeding

pub mod db;
pub mod entities;
pub mod repositories;
pub mod seed;
