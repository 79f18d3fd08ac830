//! Domain layer - Text markup, week model and export format

pub mod line_parser;
pub mod locale;
pub mod week;
pub mod week_codec;
pub mod week_ref;

pub use line_parser::{
    count_stats, parse_content, DayStats, LineCategory, LineStatus, ParsedLine,
};
pub use locale::Locale;
pub use week::{Week, WeekId};
pub use week_codec::{export_to_text, import_from_text, DayPatch, ImportResult};
pub use week_ref::WeekReference;
