//! Identity types and data structures

use super::directory::CustomClaimsDirectory;
use crate::utils::error::Result;
use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Untyped claim set as issued by the identity provider
pub type Claims = serde_json::Map<String, serde_json::Value>;

/// An authenticated caller
#[derive(Clone, PartialEq, Eq)]
pub struct Principal {
    /// Stable user identifier (token subject)
    pub uid: String,
    /// The ID token the caller presented
    pub id_token: String,
}

impl Principal {
    pub fn new(uid: impl Into<String>, id_token: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            id_token: id_token.into(),
        }
    }
}

impl std::fmt::Debug for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Principal")
            .field("uid", &self.uid)
            .field("id_token", &"[REDACTED]")
            .finish()
    }
}

/// Source of fresh claim sets for authenticated principals
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Fetch the principal's current claims; may suspend on I/O
    async fn fetch_claims(&self, principal: &Principal) -> Result<Claims>;
}

/// ID token payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdTokenClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at timestamp
    pub iat: u64,
    /// Expiration timestamp
    pub exp: u64,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// Custom claims set by an administrator
    #[serde(flatten)]
    pub custom: Claims,
}

/// HS256 token verifier backed by a custom-claims directory
#[derive(Clone)]
pub struct TokenIdentityProvider {
    /// Encoding key for signing tokens
    pub(super) encoding_key: EncodingKey,
    /// Decoding key for verifying tokens
    pub(super) decoding_key: DecodingKey,
    /// JWT algorithm
    pub(super) algorithm: Algorithm,
    /// Token issuer
    pub(super) issuer: String,
    /// Token audience
    pub(super) audience: String,
    /// Lifetime of minted tokens in seconds
    pub(super) token_ttl: u64,
    /// Authoritative custom claims per user
    pub(super) directory: Arc<CustomClaimsDirectory>,
}

impl std::fmt::Debug for TokenIdentityProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIdentityProvider")
            .field("algorithm", &self.algorithm)
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("token_ttl", &self.token_ttl)
            .field("encoding_key", &"[REDACTED]")
            .field("decoding_key", &"[REDACTED]")
            .finish()
    }
}
