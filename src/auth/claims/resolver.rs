//! Cached claims resolver

use super::extract::extract_roles;
use super::types::ResolvedClaims;
use crate::auth::identity::{IdentityProvider, Principal};
use crate::config::AuthConfig;
use crate::utils::error::{AppError, Result};
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Resolves principals to their claims, caching per user ID
///
/// Concurrent lookups for the same user share one provider call. Failures
/// are returned to every waiter and are not cached.
#[derive(Clone)]
pub struct ClaimsResolver {
    provider: Arc<dyn IdentityProvider>,
    cache: Cache<String, ResolvedClaims>,
}

impl std::fmt::Debug for ClaimsResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClaimsResolver")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

impl ClaimsResolver {
    pub fn new(provider: Arc<dyn IdentityProvider>, ttl: Duration, capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(ttl)
            .build();

        Self { provider, cache }
    }

    pub fn from_config(provider: Arc<dyn IdentityProvider>, config: &AuthConfig) -> Self {
        Self::new(
            provider,
            Duration::from_secs(config.claims_cache_ttl),
            config.claims_cache_capacity,
        )
    }

    /// Resolve the claims of an optional principal
    ///
    /// Without a principal the provider is not contacted and the result has
    /// no roles and every flag unset.
    pub async fn resolve(&self, principal: Option<&Principal>) -> Result<ResolvedClaims> {
        let Some(principal) = principal else {
            debug!("No principal, resolving to empty claims");
            return Ok(ResolvedClaims::unauthenticated());
        };

        self.cache
            .try_get_with(principal.uid.clone(), self.load(principal))
            .await
            .map_err(AppError::from)
    }

    async fn load(&self, principal: &Principal) -> Result<ResolvedClaims> {
        debug!("Fetching claims for user: {}", principal.uid);
        let claims = self.provider.fetch_claims(principal).await?;
        let resolved = ResolvedClaims::from_roles(extract_roles(&claims));
        debug!(
            "Resolved roles for user {}: {:?}",
            principal.uid,
            resolved.roles.tags()
        );
        Ok(resolved)
    }

    /// Last resolution for a user, without fetching
    pub async fn cached(&self, uid: &str) -> Option<ResolvedClaims> {
        self.cache.get(uid).await
    }

    /// Drop a user's cached resolution
    pub async fn invalidate(&self, uid: &str) {
        debug!("Invalidating cached claims for user: {}", uid);
        self.cache.invalidate(uid).await;
    }

    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}
