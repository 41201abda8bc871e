//! Services module
//!
//! Seed and administration helpers used by the HTTP layer

pub mod admin;
pub mod seed;

pub use admin::assign_roles;
pub use seed::{SeedReport, seed_database};
