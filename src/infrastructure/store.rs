//! Planner root discovery and the current-trip store

use crate::error::{PlannerError, Result};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

const TRIP_ID_FILE: &str = "trip";

/// Single-identifier store remembering which trip this machine is planning
pub trait CurrentTripStore {
    /// The stored trip id, if any
    fn get(&self) -> Result<Option<String>>;

    /// Remember `trip_id` as the current trip
    fn set(&self, trip_id: &str) -> Result<()>;

    /// Forget the current trip
    fn clear(&self) -> Result<()>;
}

/// File-backed planner root: holds config and the current trip id under
/// a `.planner` directory
#[derive(Debug, Clone)]
pub struct PlannerRoot {
    pub root: PathBuf,
}

impl PlannerRoot {
    /// Create a planner root at the given directory
    pub fn new(root: PathBuf) -> Self {
        PlannerRoot { root }
    }

    /// Discover the planner root: PLANNER_ROOT environment variable first,
    /// then walking up from the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("PLANNER_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_planner_dir(&path) {
                return Ok(PlannerRoot::new(path));
            } else {
                return Err(PlannerError::Config(format!(
                    "PLANNER_ROOT is set to '{}' but no .planner directory found. \
                    Run 'planner init' in that directory or unset PLANNER_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the planner root by walking up from a specific directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_planner_dir(&current) {
                return Ok(PlannerRoot::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(PlannerError::NotPlannerDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_planner_dir(path: &Path) -> bool {
        path.join(".planner").is_dir()
    }

    /// Check if the .planner directory exists
    pub fn is_initialized(&self) -> bool {
        Self::has_planner_dir(&self.root)
    }

    /// Create the .planner directory
    pub fn initialize(&self) -> Result<()> {
        let planner_dir = self.root.join(".planner");

        if planner_dir.exists() {
            return Err(PlannerError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&planner_dir)?;
        Ok(())
    }

    /// Load configuration from .planner/config.toml
    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    /// Save configuration to .planner/config.toml
    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn trip_id_path(&self) -> PathBuf {
        self.root.join(".planner").join(TRIP_ID_FILE)
    }
}

impl CurrentTripStore for PlannerRoot {
    fn get(&self) -> Result<Option<String>> {
        let path = self.trip_id_path();

        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        let trip_id = contents.trim();

        if trip_id.is_empty() {
            Ok(None)
        } else {
            Ok(Some(trip_id.to_string()))
        }
    }

    fn set(&self, trip_id: &str) -> Result<()> {
        fs::write(self.trip_id_path(), trip_id).map_err(PlannerError::Io)
    }

    fn clear(&self) -> Result<()> {
        let path = self.trip_id_path();

        if path.exists() {
            fs::remove_file(&path)?;
        }

        Ok(())
    }
}
