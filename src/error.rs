//! Error types for weekplan

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for weekplan application
#[derive(Debug, Error)]
pub enum WeekplanError {
    #[error("Not a weekplan directory: {0}")]
    NotWeekplanDirectory(PathBuf),

    #[error("Invalid week reference: {0}")]
    InvalidWeekReference(String),

    #[error("Invalid day: {0}")]
    InvalidDay(String),

    #[error("Could not recognize the week format")]
    UnrecognizedFormat,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl WeekplanError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            WeekplanError::NotWeekplanDirectory(_) => 2,
            WeekplanError::InvalidWeekReference(_) | WeekplanError::InvalidDay(_) => 3,
            WeekplanError::UnrecognizedFormat => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            WeekplanError::NotWeekplanDirectory(path) => {
                format!(
                    "Not a weekplan directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'weekplan init' in this directory to create a new planner\n\
                    • Navigate to an existing weekplan directory\n\
                    • Set WEEKPLAN_ROOT environment variable to your planner path",
                    path.display()
                )
            }
            WeekplanError::InvalidWeekReference(ref_str) => {
                format!(
                    "Invalid week reference: '{}'\n\n\
                    Valid week references:\n\
                    • this, last, next\n\
                    • Week ids: YYYY-Www (e.g., 2025-W03)\n\
                    • Any date inside the week: DD-MM-YYYY (e.g., 17-01-2025)\n\n\
                    Examples:\n\
                    weekplan show next\n\
                    weekplan show 2025-W03",
                    ref_str
                )
            }
            WeekplanError::InvalidDay(day) => {
                format!(
                    "Invalid day: '{}'\n\n\
                    Valid days:\n\
                    • mon, tue, ..., sun or monday, ..., sunday\n\
                    • пн, вт, ср, чт, пт, сб, вс\n\
                    • 1-7 (1 = Monday)\n\
                    • focus (the week focus)",
                    day
                )
            }
            WeekplanError::UnrecognizedFormat => "Could not recognize the week format.\n\n\
                Suggestions:\n\
                • Check that the text contains day markers on their own lines (e.g., Mon, Tue or Пн, Вт)\n\
                • A week focus section starts with a line like '🎯 Week Focus:'\n\
                • Export a week with 'weekplan export' to see the expected structure"
                .to_string(),
            WeekplanError::Config(msg) => {
                if msg.contains("Invalid locale") {
                    format!(
                        "{}\n\n\
                        Valid locales: en, ru\n\
                        Example: weekplan config locale ru",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using WeekplanError
pub type Result<T> = std::result::Result<T, WeekplanError>;
