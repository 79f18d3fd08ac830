//! Plain-text export and import of a week
//!
//! The export format is friendly to note-taking apps:
//!
//! ```text
//! Week plan 13.01.25 - 19.01.25
//!
//! 🎯 Week Focus:
//! Ship the release
//!
//! Mon
//! 10:00 Standup
//!
//! Tue
//! *
//! ```
//!
//! Import accepts the same layout in either language and is tolerant of
//! hand-edited text: anything outside a focus section or a day is ignored.

use crate::domain::locale::Locale;
use crate::domain::week::{Week, DAYS_IN_WEEK};
use crate::error::Result;
use tracing::debug;

/// Written in place of an empty day so the day survives note-app editing
const EMPTY_DAY_PLACEHOLDER: &str = "* ";

const FOCUS_GLYPH: &str = "🎯";

const DAY_MARKERS_RU: [&str; 7] = ["пн", "вт", "ср", "чт", "пт", "сб", "вс"];
const DAY_MARKERS_EN: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];
const DAY_MARKERS_EN_FULL: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

const ALL_LOCALES: [Locale; 2] = [Locale::En, Locale::Ru];

/// One day recognized during import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPatch {
    pub day_index: usize,
    pub content: String,
}

/// What an import recognized; days that were not found are absent
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportResult {
    pub focus_text: String,
    pub days: Vec<DayPatch>,
}

/// Day index (0 = Monday) if the whole line is a day marker in any language
pub fn day_marker_index(line: &str) -> Option<usize> {
    let normalized = line.trim().to_lowercase();

    [DAY_MARKERS_RU, DAY_MARKERS_EN, DAY_MARKERS_EN_FULL]
        .iter()
        .find_map(|markers| markers.iter().position(|m| *m == normalized))
}

fn is_title_line(trimmed: &str) -> bool {
    ALL_LOCALES
        .iter()
        .any(|locale| trimmed.contains(locale.week_plan_title()))
}

fn is_focus_opener(trimmed: &str) -> bool {
    trimmed.starts_with(FOCUS_GLYPH) && (trimmed.contains("Focus") || trimmed.contains("Фокус"))
}

/// Render a week as text
pub fn export_to_text(week: &Week, locale: Locale) -> Result<String> {
    let id = week.id()?;

    let mut result = format!(
        "{} {} - {}\n\n",
        locale.week_plan_title(),
        id.start_date().format("%d.%m.%y"),
        id.end_date().format("%d.%m.%y")
    );

    let focus = week.focus_text.trim();
    if !focus.is_empty() {
        result.push_str(locale.focus_header());
        result.push('\n');
        result.push_str(focus);
        result.push_str("\n\n");
    }

    for day_index in 0..DAYS_IN_WEEK {
        result.push_str(locale.day_abbreviation(day_index));
        result.push('\n');

        let content = week.day_content(day_index).trim();
        if content.is_empty() {
            result.push_str(EMPTY_DAY_PLACEHOLDER);
        } else {
            result.push_str(content);
        }
        result.push_str("\n\n");
    }

    Ok(result.trim_end().to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImportState {
    /// Outside any section; lines are ignored
    Seeking,
    InFocus,
    InDay(usize),
}

/// Line-by-line state machine behind [`import_from_text`]
struct WeekImporter<'a> {
    state: ImportState,
    focus_lines: Vec<&'a str>,
    focus_text: String,
    day_lines: Vec<&'a str>,
    days: Vec<DayPatch>,
}

impl<'a> WeekImporter<'a> {
    fn new() -> Self {
        WeekImporter {
            state: ImportState::Seeking,
            focus_lines: Vec::new(),
            focus_text: String::new(),
            day_lines: Vec::new(),
            days: Vec::new(),
        }
    }

    fn feed(&mut self, line_no: usize, line: &'a str) {
        let trimmed = line.trim();

        if line_no == 0 && is_title_line(trimmed) {
            return;
        }

        if is_focus_opener(trimmed) {
            self.leave_section();
            self.state = ImportState::InFocus;
            return;
        }

        if let Some(day_index) = day_marker_index(trimmed) {
            self.leave_section();
            self.state = ImportState::InDay(day_index);
            return;
        }

        match self.state {
            ImportState::Seeking => {}
            ImportState::InFocus => {
                if trimmed.is_empty() {
                    // Blank lines before the first focus line are skipped
                    if !self.focus_lines.is_empty() {
                        self.finish_focus();
                        self.state = ImportState::Seeking;
                    }
                } else {
                    self.focus_lines.push(line);
                }
            }
            ImportState::InDay(_) => self.day_lines.push(line),
        }
    }

    /// Close the current section before a new one opens
    fn leave_section(&mut self) {
        match self.state {
            ImportState::Seeking => {}
            ImportState::InFocus => self.finish_focus(),
            ImportState::InDay(day_index) => self.finish_day(day_index),
        }
        self.state = ImportState::Seeking;
    }

    fn finish_focus(&mut self) {
        self.focus_text = self.focus_lines.join("\n").trim().to_string();
    }

    fn finish_day(&mut self, day_index: usize) {
        let mut content = self.day_lines.join("\n").trim().to_string();
        // Export writes the placeholder for empty days and trims the last one to
        // `*`, so a day holding nothing but `*` is read back as empty. A
        // hand-written lone `*` is blanked as well.
        if content == EMPTY_DAY_PLACEHOLDER.trim() {
            content.clear();
        }
        self.day_lines.clear();
        self.days.push(DayPatch { day_index, content });
    }

    fn finish(mut self) -> Option<ImportResult> {
        // A focus section running to the end of input is kept
        self.leave_section();

        if self.days.is_empty() && self.focus_text.is_empty() {
            return None;
        }

        Some(ImportResult {
            focus_text: self.focus_text,
            days: self.days,
        })
    }
}

/// Recover a week from exported, hand-edited or pasted text.
///
/// Returns `None` when neither a day nor a focus section was recognized.
pub fn import_from_text(text: &str) -> Option<ImportResult> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut importer = WeekImporter::new();
    for (line_no, line) in text.split('\n').enumerate() {
        importer.feed(line_no, line.strip_suffix('\r').unwrap_or(line));
    }

    let result = importer.finish();
    match &result {
        Some(found) => debug!(
            days = found.days.len(),
            has_focus = !found.focus_text.is_empty(),
            "recognized week text"
        ),
        None => debug!("week text not recognized"),
    }
    result
}
