//! Week reference parsing and resolution

use crate::domain::week::WeekId;
use crate::error::{Result, WeekplanError};
use chrono::NaiveDate;

/// Represents a week reference that can be resolved against a base date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekReference {
    /// Week containing the base date
    Current,
    /// Week before the current one
    Previous,
    /// Week after the current one
    Next,
    /// Explicit week id (YYYY-Www)
    Specific(WeekId),
    /// Week containing a specific date
    Containing(NaiveDate),
}

impl WeekReference {
    /// Parse a week reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "this" | "current" | "now" | "today" => Ok(WeekReference::Current),
            "last" | "prev" | "previous" => Ok(WeekReference::Previous),
            "next" => Ok(WeekReference::Next),
            _ if normalized.contains("-w") => {
                normalized.parse::<WeekId>().map(WeekReference::Specific)
            }
            _ => {
                // Try parsing as DD-MM-YYYY
                NaiveDate::parse_from_str(&normalized, "%d-%m-%Y")
                    .map(WeekReference::Containing)
                    .map_err(|_| WeekplanError::InvalidWeekReference(input.to_string()))
            }
        }
    }

    /// Resolve this reference to a week
    pub fn resolve(&self, base_date: NaiveDate) -> Result<WeekId> {
        match self {
            WeekReference::Current => WeekId::containing(base_date),
            WeekReference::Previous => WeekId::containing(base_date)?.previous(),
            WeekReference::Next => WeekId::containing(base_date)?.next(),
            WeekReference::Specific(id) => Ok(*id),
            WeekReference::Containing(date) => WeekId::containing(*date),
        }
    }
}
