//! Sample data configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Populate sample users and courses when the server starts
    #[serde(default)]
    pub seed_on_start: bool,
}
