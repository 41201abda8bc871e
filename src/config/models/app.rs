//! Top-level service configuration

use super::*;
use crate::utils::error::{AppError, Result};
use serde::{Deserialize, Serialize};

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "COURSEWARE_";

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Sample data configuration
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Build a configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source
    ///
    /// Unset variables keep their defaults; set but unparsable ones are errors.
    /// CORS origins are file-only.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));
        let mut config = Self::default();

        if let Some(host) = var("HOST") {
            config.server.host = host;
        }
        if let Some(port) = var("PORT") {
            config.server.port = parse_var("PORT", &port)?;
        }
        if let Some(workers) = var("WORKERS") {
            config.server.workers = Some(parse_var("WORKERS", &workers)?);
        }
        if let Some(timeout) = var("REQUEST_TIMEOUT_SECS") {
            config.server.request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", &timeout)?;
        }
        if let Some(limit) = var("JSON_BODY_LIMIT") {
            config.server.json_body_limit = parse_var("JSON_BODY_LIMIT", &limit)?;
        }
        if let Some(secret) = var("JWT_SECRET") {
            config.auth.jwt_secret = secret;
        }
        if let Some(issuer) = var("JWT_ISSUER") {
            config.auth.issuer = issuer;
        }
        if let Some(audience) = var("JWT_AUDIENCE") {
            config.auth.audience = audience;
        }
        if let Some(ttl) = var("TOKEN_TTL") {
            config.auth.token_ttl = parse_var("TOKEN_TTL", &ttl)?;
        }
        if let Some(ttl) = var("CLAIMS_CACHE_TTL") {
            config.auth.claims_cache_ttl = parse_var("CLAIMS_CACHE_TTL", &ttl)?;
        }
        if let Some(capacity) = var("CLAIMS_CACHE_CAPACITY") {
            config.auth.claims_cache_capacity = parse_var("CLAIMS_CACHE_CAPACITY", &capacity)?;
        }
        if let Some(seed) = var("SEED_ON_START") {
            config.seed.seed_on_start = parse_var("SEED_ON_START", &seed)?;
        }

        Ok(config)
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e| {
        AppError::config(format!("Invalid value for {}{}: {}", ENV_PREFIX, name, e))
    })
}
