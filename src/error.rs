//! Error types for planner

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the planner application
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Not a planner directory: {0}")]
    NotPlannerDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("{0}")]
    Validation(String),

    #[error("No trip is currently selected")]
    NoCurrentTrip,

    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl PlannerError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PlannerError::NotPlannerDirectory(_) => 2,
            PlannerError::InvalidDate(_) => 3,
            PlannerError::Validation(_) => 4,
            PlannerError::NoCurrentTrip => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PlannerError::NotPlannerDirectory(path) => {
                format!(
                    "Not a planner directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'planner init' in this directory to set up a planner\n\
                    • Navigate to an existing planner directory\n\
                    • Set PLANNER_ROOT environment variable to your planner path",
                    path.display()
                )
            }
            PlannerError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Dates use the YYYY-MM-DD format.\n\n\
                    Examples:\n\
                    planner create --destination Paris --day 2024-03-12 --day 2024-03-18\n\
                    planner activity add --title \"Museum tour\" --day 2024-03-13 --hour 10",
                    input
                )
            }
            PlannerError::NoCurrentTrip => {
                "No trip is currently selected\n\n\
                Suggestions:\n\
                • Create one: planner create --destination <WHERE> --day <DATE> --day <DATE>\n\
                • Or confirm an invitation: planner guest confirm <TRIP_ID> --participant <ID> \
                --name <NAME> --email <EMAIL>"
                    .to_string()
            }
            PlannerError::Api { status, message } => {
                if message.is_empty() {
                    format!("The trip server rejected the request (status {})", status)
                } else {
                    format!(
                        "The trip server rejected the request (status {}): {}",
                        status, message
                    )
                }
            }
            PlannerError::Http(e) => {
                format!(
                    "Could not reach the trip server: {}\n\n\
                    Suggestions:\n\
                    • Check that the server is running\n\
                    • Check the configured URL: planner config api_url",
                    e
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PlannerError
pub type Result<T> = std::result::Result<T, PlannerError>;
