//! Identity token handling
//!
//! This module verifies ID tokens, mints them for seeded accounts, and
//! serves the "fetch a fresh claim set" operation the claims resolver
//! depends on.

mod directory;
mod handler;
pub mod types;
mod utils;

pub use directory::CustomClaimsDirectory;
pub use types::{Claims, IdTokenClaims, IdentityProvider, Principal, TokenIdentityProvider};
pub use utils::extract_bearer_token;

#[cfg(test)]
pub use types::MockIdentityProvider;
