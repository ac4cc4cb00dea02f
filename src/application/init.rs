//! Initialize planner use case

use crate::error::Result;
use crate::infrastructure::{Config, PlannerRoot};
use std::fs;
use std::path::Path;

/// Initialize a planner root at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let root = PlannerRoot::new(path.to_path_buf());

    root.initialize()?;

    let config = Config::new();
    root.save_config(&config)?;

    println!("Initialized planner at {}", path.display());
    println!("API: {}", config.api_url);

    Ok(())
}
