//! Token identity provider implementation

use super::directory::CustomClaimsDirectory;
use super::types::{Claims, IdTokenClaims, IdentityProvider, Principal, TokenIdentityProvider};
use crate::config::AuthConfig;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    get_current_timestamp,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Registered claim names that custom claims may not shadow
const RESERVED_CLAIMS: [&str; 5] = ["sub", "iat", "exp", "iss", "aud"];

impl TokenIdentityProvider {
    /// Create a new provider
    pub fn new(config: &AuthConfig, directory: Arc<CustomClaimsDirectory>) -> Result<Self> {
        if config.jwt_secret.is_empty() {
            return Err(AppError::config("JWT secret must not be empty"));
        }
        let secret = config.jwt_secret.as_bytes();

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            token_ttl: config.token_ttl,
            directory,
        })
    }

    /// Mint an ID token for a user
    pub fn issue_token(&self, uid: &str, mut custom: Claims) -> Result<String> {
        for name in RESERVED_CLAIMS {
            if custom.remove(name).is_some() {
                warn!("Dropping reserved claim {:?} from custom claims", name);
            }
        }

        let now = get_current_timestamp();
        let claims = IdTokenClaims {
            sub: uid.to_string(),
            iat: now,
            exp: now + self.token_ttl,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            custom,
        };

        let token = encode(&Header::new(self.algorithm), &claims, &self.encoding_key)?;

        debug!("Issued ID token for user: {}", uid);
        Ok(token)
    }

    /// Verify and decode a token
    pub fn verify_token(&self, token: &str) -> Result<IdTokenClaims> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let token_data = decode::<IdTokenClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| {
                warn!("ID token verification failed: {}", e);
                AppError::Jwt(e)
            })?;

        debug!("Token verified for user: {}", token_data.claims.sub);
        Ok(token_data.claims)
    }

    /// Custom claims directory backing this provider
    pub fn directory(&self) -> &Arc<CustomClaimsDirectory> {
        &self.directory
    }

    /// Token lifetime in seconds
    pub fn token_ttl(&self) -> u64 {
        self.token_ttl
    }
}

#[async_trait]
impl IdentityProvider for TokenIdentityProvider {
    async fn fetch_claims(&self, principal: &Principal) -> Result<Claims> {
        let token_claims = self.verify_token(&principal.id_token)?;
        if token_claims.sub != principal.uid {
            return Err(AppError::auth("ID token subject does not match principal"));
        }

        let mut claims = match serde_json::to_value(&token_claims)? {
            serde_json::Value::Object(map) => map,
            _ => return Err(AppError::internal("ID token claims are not an object")),
        };

        // Directory entries win over the claims frozen into the token
        if let Some(custom) = self.directory.custom_claims(&principal.uid) {
            for (name, value) in custom {
                if !RESERVED_CLAIMS.contains(&name.as_str()) {
                    claims.insert(name, value);
                }
            }
        }

        Ok(claims)
    }
}
