//! Config management use case

use crate::domain::Locale;
use crate::error::{Result, WeekplanError};
use crate::infrastructure::{Config, FileSystemRepository, WeekRepository};
use std::str::FromStr;

/// Service for managing planner configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "locale" => Ok(config.locale.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(WeekplanError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: locale, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "locale" => {
                config.locale = Locale::from_str(value).map_err(WeekplanError::Config)?;
            }
            "created" => {
                return Err(WeekplanError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(WeekplanError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: locale",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new(Locale::En)).unwrap();
        (temp, ConfigService::new(repo))
    }

    #[test]
    fn test_get_and_set_locale() {
        let (_temp, service) = service();
        assert_eq!(service.get("locale").unwrap(), "en");

        service.set("locale", "RU").unwrap();
        assert_eq!(service.get("locale").unwrap(), "ru");
        assert_eq!(service.list().unwrap().locale, Locale::Ru);
    }

    #[test]
    fn test_set_invalid_locale() {
        let (_temp, service) = service();
        let err = service.set("locale", "de").unwrap_err();
        assert!(err.to_string().contains("Invalid locale"));
    }

    #[test]
    fn test_created_is_read_only() {
        let (_temp, service) = service();
        assert!(service.get("created").is_ok());
        assert!(service.set("created", "yesterday").is_err());
    }

    #[test]
    fn test_unknown_key() {
        let (_temp, service) = service();
        assert!(service.get("editor").is_err());
        assert!(service.set("editor", "vim").is_err());
    }
}
