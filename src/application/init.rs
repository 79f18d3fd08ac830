//! Initialize planner use case

use crate::domain::Locale;
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, WeekRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new planner at the specified path.
pub fn init(path: &Path, locale: Locale) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    // Initialize .weekplan and weeks/ directories
    repo.initialize()?;

    let config = Config::new(locale);
    repo.save_config(&config)?;

    info!(root = %path.display(), %locale, "initialized planner");
    println!("Initialized weekplan at {}", path.display());
    println!("Locale: {}", locale);

    Ok(())
}
