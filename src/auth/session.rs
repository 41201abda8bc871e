//! Per-request authentication context
//!
//! A session carries the caller's principal and the claims resolved for it.
//! Handlers receive it explicitly instead of consulting a shared store.

use super::claims::ResolvedClaims;
use super::gate::AuthorizationGate;
use super::identity::Principal;
use super::roles::RoleSet;
use crate::utils::error::{AppError, Result};

#[derive(Debug, Clone, Default)]
pub struct Session {
    principal: Option<Principal>,
    claims: ResolvedClaims,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(principal: Principal, claims: ResolvedClaims) -> Self {
        Self {
            principal: Some(principal),
            claims,
        }
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    pub fn uid(&self) -> Option<&str> {
        self.principal.as_ref().map(|p| p.uid.as_str())
    }

    pub fn claims(&self) -> &ResolvedClaims {
        &self.claims
    }

    pub fn roles(&self) -> &RoleSet {
        &self.claims.roles
    }

    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }

    /// Require a principal whose roles pass the gate
    pub fn require_any(&self, gate: &AuthorizationGate) -> Result<&Principal> {
        let principal = self
            .principal
            .as_ref()
            .ok_or_else(|| AppError::unauthorized("Sign in required"))?;

        if gate.allows(self.claims.roles.as_slice()) {
            Ok(principal)
        } else {
            Err(AppError::forbidden(format!(
                "Requires one of: {}",
                gate.describe()
            )))
        }
    }
}
