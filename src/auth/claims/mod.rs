//! Claims resolution
//!
//! Turns an optional principal into its role set and derived flags,
//! fetching claims from the identity provider and caching the result per
//! user.

mod extract;
mod resolver;
mod types;

pub(crate) use extract::ROLES_CLAIM;
pub use extract::extract_roles;
pub use resolver::ClaimsResolver;
pub use types::ResolvedClaims;
