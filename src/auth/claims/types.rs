//! Resolved claims type

use crate::auth::roles::{Role, RoleSet};
use serde::Serialize;

/// A principal's roles together with the flags derived from them
///
/// Built only through `from_roles` and `unauthenticated`, so the flags
/// always agree with `roles`. Serialized for responses, never parsed back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedClaims {
    pub roles: RoleSet,
    pub is_admin: bool,
    pub is_instructor: bool,
    pub is_student: bool,
}

impl ResolvedClaims {
    /// Derive flags for an authenticated principal's roles
    pub fn from_roles(roles: RoleSet) -> Self {
        Self {
            is_admin: roles.is_admin(),
            is_instructor: roles.is_instructor(),
            is_student: roles.is_student(),
            roles,
        }
    }

    /// Result for a caller with no principal: no roles and no classification
    pub fn unauthenticated() -> Self {
        Self::default()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.has_role(role)
    }

    pub fn roles(&self) -> &RoleSet {
        &self.roles
    }
}
