//! HTTP listener and browser access settings

use super::*;
use serde::{Deserialize, Serialize};

/// Methods the course API answers for cross-origin callers
pub const CORS_METHODS: &[&str] = &["GET", "POST", "PATCH"];

/// Request headers a browser client may send cross-origin
pub const CORS_HEADERS: &[&str] = &["authorization", "content-type"];

const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
const MIN_JSON_BODY_LIMIT: usize = 1024;
const MAX_JSON_BODY_LIMIT: usize = 16 * 1024 * 1024;

/// Listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Worker threads; actix starts one per core when unset
    pub workers: Option<usize>,
    /// Seconds a client has to finish sending request headers
    pub request_timeout_secs: u64,
    /// Largest JSON body a course or user patch may carry, in bytes
    pub json_body_limit: usize,
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            request_timeout_secs: 30,
            json_body_limit: 64 * 1024,
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// `host:port` to bind
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("port must be set to a non-zero value".to_string());
        }
        if self.workers == Some(0) {
            return Err("workers must be at least 1 when set".to_string());
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(format!(
                "request_timeout_secs must be between 1 and {}",
                MAX_REQUEST_TIMEOUT_SECS
            ));
        }
        if !(MIN_JSON_BODY_LIMIT..=MAX_JSON_BODY_LIMIT).contains(&self.json_body_limit) {
            return Err(format!(
                "json_body_limit must be between {} and {} bytes",
                MIN_JSON_BODY_LIMIT, MAX_JSON_BODY_LIMIT
            ));
        }
        Ok(())
    }
}

/// Which browser frontends may call the API
///
/// An empty origin list disables cross-origin access entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Exact origins such as `https://learn.example.com`, or `*` for any
    pub origins: Vec<String>,
    /// Whether browsers may attach credentials to cross-origin requests
    pub allow_credentials: bool,
    /// Seconds a browser may cache a preflight answer
    pub preflight_max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: vec!["http://localhost:3000".to_string()],
            allow_credentials: false,
            preflight_max_age: 600,
        }
    }
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.origins.iter().any(|origin| origin == "*")
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.allows_any_origin() {
            if self.origins.len() > 1 {
                return Err("`*` cannot be listed alongside specific origins".to_string());
            }
            if self.allow_credentials {
                return Err("credentials require an explicit origin list, not `*`".to_string());
            }
            return Ok(());
        }

        for origin in &self.origins {
            let host = origin
                .strip_prefix("https://")
                .or_else(|| origin.strip_prefix("http://"));
            match host {
                Some(host) if !host.is_empty() && !host.contains('/') => {}
                _ => {
                    return Err(format!(
                        "origin `{}` must look like scheme://host[:port] with no path",
                        origin
                    ));
                }
            }
        }
        Ok(())
    }
}
