//! Export week use case

use crate::domain::{export_to_text, Locale, WeekId};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, WeekRepository};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// An exported week ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekExport {
    /// Suggested file name, e.g. `week-2025-03.txt`
    pub filename: String,
    pub text: String,
}

impl WeekExport {
    /// Write the export. A directory target receives the suggested file name.
    pub fn write_to(&self, target: &Path) -> Result<PathBuf> {
        let path = if target.is_dir() {
            target.join(&self.filename)
        } else {
            target.to_path_buf()
        };

        fs::write(&path, &self.text)?;
        info!(path = %path.display(), "wrote week export");
        Ok(path)
    }
}

/// Render a stored week in the plain-text export format.
pub fn export_week(
    repository: &FileSystemRepository,
    id: WeekId,
    locale: Locale,
) -> Result<WeekExport> {
    let week = repository.load_week(id)?;
    let text = export_to_text(&week, locale)?;

    Ok(WeekExport {
        filename: id.export_filename(),
        text,
    })
}
