//! Configuration management for the service
//!
//! This module handles loading and validation of the service configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{AppError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service configuration
    pub app: AppConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml(&content)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let app: AppConfig = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { app };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            app: AppConfig::from_env()?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.app.server
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.app.auth
    }

    /// Get seed configuration
    pub fn seed(&self) -> &SeedConfig {
        &self.app.seed
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.app
            .server
            .validate()
            .map_err(|e| AppError::Config(format!("Server config error: {}", e)))?;

        self.app
            .auth
            .validate()
            .map_err(|e| AppError::Config(format!("Auth config error: {}", e)))?;

        self.app
            .server
            .cors
            .validate()
            .map_err(|e| AppError::Config(format!("CORS config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.app)
            .map_err(|e| AppError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
