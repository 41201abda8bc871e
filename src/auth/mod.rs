//! Authentication and authorization system
//!
//! Role model, identity tokens, claims resolution and the authorization gate.

pub mod claims;
pub mod gate;
pub mod identity;
pub mod roles;
pub mod session;

pub use claims::{ClaimsResolver, ResolvedClaims};
pub use gate::AuthorizationGate;
pub use identity::{Claims, CustomClaimsDirectory, IdentityProvider, Principal, TokenIdentityProvider};
pub use roles::{Role, RoleSet};
pub use session::Session;

use crate::config::AuthConfig;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Main authentication system
#[derive(Clone, Debug)]
pub struct AuthSystem {
    /// Authentication configuration
    config: Arc<AuthConfig>,
    /// Token verifier and issuer
    tokens: Arc<TokenIdentityProvider>,
    /// Cached claims resolution
    resolver: ClaimsResolver,
}

impl AuthSystem {
    /// Create a new authentication system backed by the token provider
    pub fn new(config: &AuthConfig) -> Result<Self> {
        info!("Initializing authentication system");

        let directory = Arc::new(CustomClaimsDirectory::new());
        let tokens = Arc::new(TokenIdentityProvider::new(config, directory)?);
        let resolver = ClaimsResolver::from_config(tokens.clone(), config);

        info!("Authentication system initialized successfully");
        Ok(Self {
            config: Arc::new(config.clone()),
            tokens,
            resolver,
        })
    }

    /// Create a system whose claims come from a different provider
    ///
    /// Bearer tokens are still verified with the token provider.
    pub fn with_provider(config: &AuthConfig, provider: Arc<dyn IdentityProvider>) -> Result<Self> {
        let directory = Arc::new(CustomClaimsDirectory::new());
        let tokens = Arc::new(TokenIdentityProvider::new(config, directory)?);

        Ok(Self {
            config: Arc::new(config.clone()),
            tokens,
            resolver: ClaimsResolver::from_config(provider, config),
        })
    }

    /// Principal for an Authorization header, if one was sent
    pub fn authenticate(&self, authorization: Option<&str>) -> Result<Option<Principal>> {
        authorization
            .map(|header| Principal::from_bearer(&self.tokens, header))
            .transpose()
    }

    /// Authenticate a request and resolve its claims
    pub async fn session(&self, authorization: Option<&str>) -> Result<Session> {
        let Some(principal) = self.authenticate(authorization)? else {
            return Ok(Session::anonymous());
        };

        let claims = self.resolver.resolve(Some(&principal)).await?;
        debug!("Session established for user: {}", principal.uid);
        Ok(Session::authenticated(principal, claims))
    }

    /// Mint an ID token carrying the user's current custom claims
    pub fn issue_token(&self, uid: &str) -> Result<String> {
        let custom = self
            .tokens
            .directory()
            .custom_claims(uid)
            .unwrap_or_default();
        self.tokens.issue_token(uid, custom)
    }

    /// Replace a user's roles claim and drop the cached resolution
    pub async fn set_roles(&self, uid: &str, roles: &RoleSet) -> Result<()> {
        let directory = self.tokens.directory();
        let mut custom = directory.custom_claims(uid).unwrap_or_default();
        custom.insert(
            claims::ROLES_CLAIM.to_string(),
            serde_json::to_value(roles)?,
        );
        directory.set_custom_claims(uid, custom);

        self.resolver.invalidate(uid).await;
        info!("Roles for user {} set to {:?}", uid, roles.tags());
        Ok(())
    }

    /// Get authentication configuration
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub fn tokens(&self) -> &TokenIdentityProvider {
        &self.tokens
    }

    pub fn resolver(&self) -> &ClaimsResolver {
        &self.resolver
    }

    pub fn directory(&self) -> &CustomClaimsDirectory {
        self.tokens.directory()
    }
}
