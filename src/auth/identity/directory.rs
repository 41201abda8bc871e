//! Custom claims held per user

use super::types::Claims;
use dashmap::DashMap;
use tracing::debug;

/// Admin-owned record of each user's custom claims
///
/// Token fetches overlay these on top of whatever the presented token
/// carries, so a write here is visible on the next fetch.
#[derive(Debug, Default)]
pub struct CustomClaimsDirectory {
    entries: DashMap<String, Claims>,
}

impl CustomClaimsDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a user's custom claims
    pub fn set_custom_claims(&self, uid: &str, claims: Claims) {
        debug!("Setting custom claims for user: {}", uid);
        self.entries.insert(uid.to_string(), claims);
    }

    pub fn custom_claims(&self, uid: &str) -> Option<Claims> {
        self.entries.get(uid).map(|entry| entry.value().clone())
    }

    pub fn remove(&self, uid: &str) -> Option<Claims> {
        self.entries.remove(uid).map(|(_, claims)| claims)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
