//! # Courseware-RS
//!
//! Backend for a course platform with role-based access control.
//!
//! Callers authenticate with a signed ID token. Their roles come from the
//! token's custom claims, are resolved once per user and cached, and are
//! checked against authorization gates on protected routes.
//!
//! ## Roles
//!
//! ```rust
//! use courseware_rs::auth::{Role, RoleSet};
//!
//! let roles = RoleSet::from_tags(["admin"]);
//! assert!(roles.is_admin());
//! assert!(roles.is_instructor());
//! assert!(!roles.is_student());
//!
//! // No roles at all classifies as a student
//! assert!(RoleSet::default().is_student());
//! assert!(!RoleSet::new(vec![Role::Instructor]).is_student());
//! ```
//!
//! ## Server Mode
//!
//! ```rust,no_run
//! use courseware_rs::{Config, Courseware};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/courseware.yaml").await?;
//!     let service = Courseware::new(config).await?;
//!     service.run().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

pub use auth::{AuthSystem, AuthorizationGate, ResolvedClaims, Role, RoleSet, Session};
pub use config::Config;
pub use utils::error::{AppError, Result};

use tracing::info;

/// The course platform service
pub struct Courseware {
    config: Config,
    server: server::HttpServer,
}

impl Courseware {
    /// Create a new service instance
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating new service instance");

        let server = server::ServerBuilder::new()
            .with_config(config.clone())
            .build()
            .await?;

        Ok(Self { config, server })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the HTTP server
    pub async fn run(self) -> Result<()> {
        let build = build_info();
        info!(
            "Starting {} v{} (commit {}, built {})",
            NAME, build.version, build.git_hash, build.build_time
        );

        self.server.start().await
    }
}

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
