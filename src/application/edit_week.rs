//! Week editing use case

use crate::domain::week::parse_day;
use crate::domain::{Week, WeekId};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, WeekRepository};
use std::str::FromStr;
use tracing::info;

/// Which text blob of a week to replace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryTarget {
    Focus,
    Day(usize),
}

impl FromStr for EntryTarget {
    type Err = crate::error::WeekplanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "focus" | "фокус" => Ok(EntryTarget::Focus),
            _ => parse_day(s).map(EntryTarget::Day),
        }
    }
}

/// Service for reading and editing stored weeks
pub struct EditWeekService {
    repository: FileSystemRepository,
}

impl EditWeekService {
    pub fn new(repository: FileSystemRepository) -> Self {
        EditWeekService { repository }
    }

    /// Load a week; a week never written is empty
    pub fn load(&self, id: WeekId) -> Result<Week> {
        self.repository.load_week(id)
    }

    /// Replace the focus text or one day's text and store the week
    pub fn set_entry(&self, id: WeekId, target: EntryTarget, content: &str) -> Result<Week> {
        let mut week = self.repository.load_week(id)?;

        match target {
            EntryTarget::Focus => week.focus_text = content.to_string(),
            EntryTarget::Day(day_index) => week.set_day(day_index, content),
        }

        self.repository.save_week(&week)?;
        info!(week = %id, ?target, "updated week");
        Ok(week)
    }
}
