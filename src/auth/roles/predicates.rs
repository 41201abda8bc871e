//! Membership predicates over a role collection
//!
//! Plain containment checks. The only special cases are that `admin`
//! satisfies an instructor check and that an empty collection classifies
//! as a student.

use super::types::Role;

/// Whether `role` is present in `roles`
pub fn has_role(roles: &[Role], role: Role) -> bool {
    roles.contains(&role)
}

/// Whether at least one candidate is present; `false` for no candidates
pub fn has_any_role(roles: &[Role], candidates: &[Role]) -> bool {
    candidates.iter().any(|candidate| has_role(roles, *candidate))
}

/// Whether every candidate is present; `true` for no candidates
pub fn has_all_roles(roles: &[Role], candidates: &[Role]) -> bool {
    candidates.iter().all(|candidate| has_role(roles, *candidate))
}

pub fn is_admin(roles: &[Role]) -> bool {
    has_role(roles, Role::Admin)
}

/// Admins hold instructor privilege
pub fn is_instructor(roles: &[Role]) -> bool {
    has_role(roles, Role::Instructor) || has_role(roles, Role::Admin)
}

/// Student is the default classification for a principal without roles
pub fn is_student(roles: &[Role]) -> bool {
    has_role(roles, Role::Student) || roles.is_empty()
}
