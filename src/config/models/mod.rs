//! Configuration data models
//!
//! This module defines all configuration structures used throughout the service.

#![allow(missing_docs)]

pub mod app;
pub mod auth;
pub mod seed;
pub mod server;

// Re-export all configuration types
pub use app::*;
pub use auth::*;
pub use seed::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default ID token lifetime in seconds
pub fn default_token_ttl() -> u64 {
    3600
}

/// Default lifetime of a cached claims resolution in seconds
pub fn default_claims_cache_ttl() -> u64 {
    300
}

pub fn default_claims_cache_capacity() -> u64 {
    10_000
}

pub fn default_issuer() -> String {
    "courseware".to_string()
}

pub fn default_audience() -> String {
    "courseware-web".to_string()
}
