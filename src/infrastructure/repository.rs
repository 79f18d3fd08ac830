//! File system repository

use crate::domain::{Week, WeekId};
use crate::error::{Result, WeekplanError};
use crate::infrastructure::config::META_DIR;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory (relative to the root) holding one TOML file per week
pub const WEEKS_DIR: &str = "weeks";

/// A stored week file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekEntry {
    pub filename: String,
    pub id: WeekId,
}

impl WeekEntry {
    pub fn new(filename: String, id: WeekId) -> Self {
        WeekEntry { filename, id }
    }
}

/// Abstract repository for planner operations
pub trait WeekRepository {
    /// Load configuration from .weekplan/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .weekplan/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .weekplan directory exists
    fn is_initialized(&self) -> bool;

    /// Create .weekplan directory structure
    fn initialize(&self) -> Result<()>;

    /// Load a week; weeks never written load empty
    fn load_week(&self, id: WeekId) -> Result<Week>;

    /// Store a week, replacing any previous version
    fn save_week(&self, week: &Week) -> Result<()>;
}

/// File system implementation of WeekRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover planner root by walking up from current directory
    /// First checks WEEKPLAN_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        // 1. Check WEEKPLAN_ROOT environment variable first
        if let Ok(root_path) = std::env::var("WEEKPLAN_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_meta_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(WeekplanError::Config(format!(
                    "WEEKPLAN_ROOT is set to '{}' but no .weekplan directory found. \
                    Run 'weekplan init' in that directory or unset WEEKPLAN_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover planner root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_meta_dir(&current) {
                debug!(root = %current.display(), "found planner root");
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(WeekplanError::NotWeekplanDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .weekplan directory
    fn has_meta_dir(path: &Path) -> bool {
        path.join(META_DIR).is_dir()
    }

    /// Path of a week file relative to the root, e.g. `weeks/2025-W03.toml`
    pub fn week_filename(id: WeekId) -> String {
        format!("{}/{}.toml", WEEKS_DIR, id)
    }

    /// Write a file using a best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn write_atomic(&self, filename: &str, content: &str) -> Result<()> {
        let path = self.root.join(filename);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.weekplan-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("week.toml"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    /// List stored weeks, newest first
    pub fn list_weeks(&self, limit: Option<usize>) -> Result<Vec<WeekEntry>> {
        let dir = self.root.join(WEEKS_DIR);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut weeks = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let Ok(entry) = entry else {
                continue;
            };
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("toml") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match stem.parse::<WeekId>() {
                Ok(id) => weeks.push(WeekEntry::new(Self::week_filename(id), id)),
                Err(_) => debug!(file = %path.display(), "skipping file with no week id"),
            }
        }

        weeks.sort_by(|a, b| b.id.cmp(&a.id));

        if let Some(n) = limit {
            weeks.truncate(n);
        }

        Ok(weeks)
    }
}

impl WeekRepository for FileSystemRepository {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_meta_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let meta_dir = self.root.join(META_DIR);

        if meta_dir.exists() {
            return Err(WeekplanError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&meta_dir)?;
        fs::create_dir_all(self.root.join(WEEKS_DIR))?;
        Ok(())
    }

    fn load_week(&self, id: WeekId) -> Result<Week> {
        let path = self.root.join(Self::week_filename(id));

        if !path.exists() {
            debug!(week = %id, "no stored week, starting empty");
            return Ok(Week::empty(id));
        }

        let contents = fs::read_to_string(&path)?;
        let week: Week = toml::from_str(&contents).map_err(|e| {
            WeekplanError::Storage(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        if week.year != id.year() || week.week_number != id.week_number() {
            return Err(WeekplanError::Storage(format!(
                "{} holds week {}-W{:02}, expected {}",
                path.display(),
                week.year,
                week.week_number,
                id
            )));
        }

        Ok(week)
    }

    fn save_week(&self, week: &Week) -> Result<()> {
        let id = week.id()?;
        let contents = toml::to_string_pretty(week)?;
        self.write_atomic(&Self::week_filename(id), &contents)?;
        debug!(week = %id, "saved week");
        Ok(())
    }
}
