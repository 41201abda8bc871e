//! Role extraction from untyped claims

use crate::auth::identity::Claims;
use crate::auth::roles::RoleSet;
use serde_json::Value;
use tracing::debug;

/// Claim name holding the role tags
pub(crate) const ROLES_CLAIM: &str = "roles";

/// Read the `roles` claim into a typed set
///
/// A missing or non-array claim yields an empty set. Elements that are not
/// strings, or not known role tags, are dropped.
pub fn extract_roles(claims: &Claims) -> RoleSet {
    match claims.get(ROLES_CLAIM) {
        Some(Value::Array(items)) => RoleSet::from_tags(items.iter().filter_map(Value::as_str)),
        Some(other) => {
            debug!("Ignoring malformed roles claim: {}", other);
            RoleSet::default()
        }
        None => RoleSet::default(),
    }
}
