//! Role model
//!
//! The closed role vocabulary and the membership predicates every
//! authorization decision in the crate is built from.

mod predicates;
mod set;
mod types;

pub use predicates::{has_all_roles, has_any_role, has_role, is_admin, is_instructor, is_student};
pub use set::RoleSet;
pub use types::Role;
