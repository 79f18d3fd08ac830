//! Configuration management

use crate::domain::Locale;
use crate::error::{Result, WeekplanError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

/// Directory holding planner metadata
pub const META_DIR: &str = ".weekplan";

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub locale: Locale,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new(locale: Locale) -> Self {
        Config {
            locale,
            created: Utc::now(),
        }
    }

    /// Load config from .weekplan/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(META_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                WeekplanError::NotWeekplanDirectory(path.to_path_buf())
            } else {
                WeekplanError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| WeekplanError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .weekplan/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let meta_dir = path.join(META_DIR);
        let config_path = meta_dir.join(CONFIG_FILE);

        // Ensure .weekplan directory exists
        if !meta_dir.exists() {
            fs::create_dir(&meta_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| WeekplanError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the locale, letting WEEKPLAN_LOCALE override the stored value
    pub fn get_locale(&self) -> Locale {
        Self::locale_override(std::env::var("WEEKPLAN_LOCALE").ok().as_deref())
            .unwrap_or(self.locale)
    }

    fn locale_override(value: Option<&str>) -> Option<Locale> {
        let value = value?;
        match Locale::from_str(value) {
            Ok(locale) => Some(locale),
            Err(e) => {
                warn!("Ignoring WEEKPLAN_LOCALE: {}", e);
                None
            }
        }
    }
}
