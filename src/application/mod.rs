//! Application layer - Use cases and orchestration

pub mod edit_week;
pub mod export_week;
pub mod import_week;
pub mod init;
pub mod list_weeks;
pub mod manage_config;

pub use edit_week::{EditWeekService, EntryTarget};
pub use export_week::{export_week, WeekExport};
pub use import_week::{import_week, ImportOptions, ImportOutcome};
pub use list_weeks::{list_weeks, WeekSummary};
