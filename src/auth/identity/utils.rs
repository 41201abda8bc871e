//! Identity utility functions

use super::types::{Principal, TokenIdentityProvider};
use crate::utils::error::{AppError, Result};

/// Extract the token from an Authorization header value
pub fn extract_bearer_token(header_value: &str) -> Option<&str> {
    header_value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl Principal {
    /// Build a principal from an Authorization header value
    pub fn from_bearer(provider: &TokenIdentityProvider, header_value: &str) -> Result<Self> {
        let token = extract_bearer_token(header_value)
            .ok_or_else(|| AppError::auth("Authorization header must be a Bearer token"))?;

        let claims = provider.verify_token(token)?;
        Ok(Self::new(claims.sub, token))
    }
}
