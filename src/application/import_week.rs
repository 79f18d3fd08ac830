//! Import week use case
//!
//! Recognizes a week in arbitrary text and merges it into a stored week.
//! Only the days found in the text are replaced; the focus is replaced only
//! when the text carries one.

use crate::domain::{import_from_text, ImportResult, Locale, WeekId};
use crate::error::{Result, WeekplanError};
use crate::infrastructure::{FileSystemRepository, WeekRepository};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub week: WeekId,
    pub locale: Locale,
    /// Apply without asking
    pub yes: bool,
}

/// What an import found and whether it was stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub result: ImportResult,
    pub applied: bool,
}

impl ImportOutcome {
    pub fn focus_changes(&self) -> bool {
        !self.result.focus_text.is_empty()
    }
}

pub fn import_week(
    repository: &FileSystemRepository,
    text: &str,
    options: ImportOptions,
) -> Result<ImportOutcome> {
    let Some(result) = import_from_text(text) else {
        warn!("import text not recognized");
        return Err(WeekplanError::UnrecognizedFormat);
    };

    let outcome = ImportOutcome {
        result,
        applied: false,
    };

    println!("Import into {}:", options.week);
    println!(
        "{}",
        options
            .locale
            .import_summary(outcome.result.days.len(), outcome.focus_changes())
    );

    if !options.yes {
        println!("Refusing to run without --yes. Re-run with --yes to apply the import.");
        return Ok(outcome);
    }

    let mut week = repository.load_week(options.week)?;
    week.apply_import(&outcome.result);
    repository.save_week(&week)?;

    info!(
        week = %options.week,
        days = outcome.result.days.len(),
        focus = outcome.focus_changes(),
        "applied import"
    );
    println!("Import complete.");

    Ok(ImportOutcome {
        applied: true,
        ..outcome
    })
}
