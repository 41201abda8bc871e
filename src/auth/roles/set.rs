//! Role set held by one principal

use super::predicates;
use super::types::Role;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Ordered roles of one principal, as found in its token claims
///
/// Duplicates are kept; every check is set-semantic so they have no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(Vec<Role>);

impl RoleSet {
    pub fn new(roles: Vec<Role>) -> Self {
        Self(roles)
    }

    /// Build a set from boundary tags, dropping tags outside the vocabulary
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let roles = tags
            .into_iter()
            .filter_map(|tag| match tag.as_ref().parse::<Role>() {
                Ok(role) => Some(role),
                Err(_) => {
                    warn!("Ignoring unrecognized role tag: {:?}", tag.as_ref());
                    None
                }
            })
            .collect();

        Self(roles)
    }

    pub fn as_slice(&self) -> &[Role] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Role> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Boundary tags, in order
    pub fn tags(&self) -> Vec<&'static str> {
        self.0.iter().map(Role::as_str).collect()
    }

    pub fn has_role(&self, role: Role) -> bool {
        predicates::has_role(&self.0, role)
    }

    pub fn has_any_role(&self, candidates: &[Role]) -> bool {
        predicates::has_any_role(&self.0, candidates)
    }

    pub fn has_all_roles(&self, candidates: &[Role]) -> bool {
        predicates::has_all_roles(&self.0, candidates)
    }

    pub fn is_admin(&self) -> bool {
        predicates::is_admin(&self.0)
    }

    pub fn is_instructor(&self) -> bool {
        predicates::is_instructor(&self.0)
    }

    pub fn is_student(&self) -> bool {
        predicates::is_student(&self.0)
    }
}

impl From<Vec<Role>> for RoleSet {
    fn from(roles: Vec<Role>) -> Self {
        Self(roles)
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<T: IntoIterator<Item = Role>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RoleSet {
    type Item = &'a Role;
    type IntoIter = std::slice::Iter<'a, Role>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl AsRef<[Role]> for RoleSet {
    fn as_ref(&self) -> &[Role] {
        &self.0
    }
}
