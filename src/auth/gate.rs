//! Authorization gate
//!
//! Decides whether protected content is exposed to the current role set.
//! The decision is synchronous and uses whatever resolution the caller
//! already holds; it never fetches claims.

use super::claims::ResolvedClaims;
use super::roles::{Role, has_any_role};

/// Allow-list of roles guarding a piece of content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationGate {
    allowed: Vec<Role>,
}

impl AuthorizationGate {
    pub fn new(allowed: impl Into<Vec<Role>>) -> Self {
        Self {
            allowed: allowed.into(),
        }
    }

    /// Gate for course authoring; admins pass as well
    pub fn instructor() -> Self {
        Self::new([Role::Instructor, Role::Admin])
    }

    pub fn admin() -> Self {
        Self::new([Role::Admin])
    }

    /// Whether the roles intersect the allow-list; an empty allow-list never passes
    pub fn allows(&self, roles: &[Role]) -> bool {
        has_any_role(roles, &self.allowed)
    }

    /// Content when allowed, otherwise the fallback (if any)
    pub fn render<T>(&self, roles: &[Role], content: T, fallback: Option<T>) -> Option<T> {
        if self.allows(roles) {
            Some(content)
        } else {
            fallback
        }
    }

    /// Like [`render`](Self::render), failing closed when nothing was resolved
    pub fn render_resolved<T>(
        &self,
        resolved: Option<&ResolvedClaims>,
        content: T,
        fallback: Option<T>,
    ) -> Option<T> {
        match resolved {
            Some(claims) => self.render(claims.roles.as_slice(), content, fallback),
            None => fallback,
        }
    }

    /// Allow-list as a comma separated list of tags
    pub fn describe(&self) -> String {
        self.allowed
            .iter()
            .map(Role::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
