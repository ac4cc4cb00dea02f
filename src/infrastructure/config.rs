//! Configuration management

use crate::error::{PlannerError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_OWNER_NAME: &str = "Trip Owner";
pub const DEFAULT_OWNER_EMAIL: &str = "owner@example.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_url: String,
    pub owner_name: String,
    pub owner_email: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            owner_name: DEFAULT_OWNER_NAME.to_string(),
            owner_email: DEFAULT_OWNER_EMAIL.to_string(),
            created: Utc::now(),
        }
    }

    /// Load config from .planner/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".planner").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PlannerError::NotPlannerDirectory(path.to_path_buf())
            } else {
                PlannerError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| PlannerError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .planner/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let planner_dir = path.join(".planner");
        let config_path = planner_dir.join("config.toml");

        if !planner_dir.exists() {
            fs::create_dir(&planner_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| PlannerError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the API base URL, checking the environment first
    pub fn api_url(&self) -> String {
        std::env::var("PLANNER_API_URL").unwrap_or_else(|_| self.api_url.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
