//! Config management use case

use crate::domain::validate;
use crate::error::{PlannerError, Result};
use crate::infrastructure::{Config, PlannerRoot};

/// Service for managing planner configuration
pub struct ConfigService {
    root: PlannerRoot,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(root: PlannerRoot) -> Self {
        ConfigService { root }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.root.load_config()?;

        match key {
            "api_url" => Ok(config.api_url.clone()),
            "owner_name" => Ok(config.owner_name.clone()),
            "owner_email" => Ok(config.owner_email.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(PlannerError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: api_url, owner_name, owner_email, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.root.load_config()?;

        match key {
            "api_url" => {
                if !validate::is_valid_url(value) {
                    return Err(PlannerError::Config(format!(
                        "api_url must start with http:// or https://, got '{}'",
                        value
                    )));
                }
                config.api_url = value.to_string();
            }
            "owner_name" => {
                config.owner_name = value.to_string();
            }
            "owner_email" => {
                if !validate::is_valid_email(value) {
                    return Err(PlannerError::Config(format!(
                        "owner_email is not a valid email address: '{}'",
                        value
                    )));
                }
                config.owner_email = value.to_string();
            }
            "created" => {
                return Err(PlannerError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(PlannerError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: api_url, owner_name, owner_email",
                    key
                )));
            }
        }

        self.root.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.root.load_config()
    }
}
