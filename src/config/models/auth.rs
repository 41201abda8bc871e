//! Authentication configuration

use super::*;
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};
use serde::{Deserialize, Serialize};

/// Longest accepted ID token lifetime
const MAX_TOKEN_TTL: u64 = 86400 * 30;

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret for ID tokens
    #[serde(default = "generate_secure_jwt_secret")]
    pub jwt_secret: String,
    /// Expected token issuer
    #[serde(default = "default_issuer")]
    pub issuer: String,
    /// Expected token audience
    #[serde(default = "default_audience")]
    pub audience: String,
    /// Lifetime of minted ID tokens in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl: u64,
    /// Lifetime of a cached claims resolution in seconds
    #[serde(default = "default_claims_cache_ttl")]
    pub claims_cache_ttl: u64,
    /// Maximum number of cached claims resolutions
    #[serde(default = "default_claims_cache_capacity")]
    pub claims_cache_capacity: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: generate_secure_jwt_secret(),
            issuer: default_issuer(),
            audience: default_audience(),
            token_ttl: default_token_ttl(),
            claims_cache_ttl: default_claims_cache_ttl(),
            claims_cache_capacity: default_claims_cache_capacity(),
        }
    }
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.len() < 32 {
            return Err("JWT secret must be at least 32 characters long for security".to_string());
        }

        if self.jwt_secret == "your-secret-key" || self.jwt_secret == "change-me" {
            return Err("JWT secret must not use default values".to_string());
        }

        if self.jwt_secret.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(
                "JWT secret should contain mixed case letters, numbers, and special characters"
                    .to_string(),
            );
        }

        if self.issuer.is_empty() || self.audience.is_empty() {
            return Err("Token issuer and audience cannot be empty".to_string());
        }

        if self.token_ttl < 300 {
            return Err("Token TTL should be at least 5 minutes (300 seconds)".to_string());
        }

        if self.token_ttl > MAX_TOKEN_TTL {
            return Err("Token TTL should not exceed 30 days".to_string());
        }

        if self.claims_cache_ttl == 0 || self.claims_cache_capacity == 0 {
            return Err("Claims cache TTL and capacity must be greater than 0".to_string());
        }

        Ok(())
    }
}

/// Generate a secure random JWT secret
fn generate_secure_jwt_secret() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}
