//! Server builder

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::server::state::AppState;
use crate::services::seed_database;
use crate::utils::error::{AppError, Result};
use tracing::{info, warn};

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server, seeding sample data if configured
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| AppError::config("Configuration is required"))?;

        let state = AppState::from_config(config)?;
        if state.config.seed().seed_on_start {
            match seed_database(&state.auth, &state.storage).await {
                Ok(report) => info!(
                    "Seeded {} users and {} courses on startup",
                    report.users, report.courses
                ),
                Err(e) => warn!("Startup seeding failed: {}", e),
            }
        }

        Ok(HttpServer::with_state(state))
    }
}
