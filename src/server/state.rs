//! Application state shared across HTTP handlers

use crate::auth::AuthSystem;
use crate::config::Config;
use crate::storage::StorageLayer;
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Every field is behind an `Arc`; cloning the state is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Authentication system
    pub auth: Arc<AuthSystem>,
    /// Storage layer
    pub storage: Arc<StorageLayer>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, auth: AuthSystem, storage: StorageLayer) -> Self {
        Self {
            config: Arc::new(config),
            auth: Arc::new(auth),
            storage: Arc::new(storage),
        }
    }

    /// Build the authentication system and in-memory storage for `config`
    pub fn from_config(config: Config) -> Result<Self> {
        let auth = AuthSystem::new(config.auth())?;
        Ok(Self::new(config, auth, StorageLayer::in_memory()))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
