//! Day text markup parsing
//!
//! Each line of a day's free-form text is classified into a header, task or
//! subtask, with an optional completion marker (`++` done, `+-` partial) and
//! an optional leading time or time range.

use regex::Regex;
use std::sync::OnceLock;

/// How a line is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCategory {
    /// A single capitalized word or an acronym (e.g. "Work", "GYM")
    Header,
    /// Any other line
    Task,
    /// A line starting with a dash
    Subtask,
    /// Reserved for renderers; never produced by [`parse_content`]
    Note,
}

/// Completion marker extracted from a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStatus {
    #[default]
    None,
    Done,
    Partial,
}

/// One line of a day's text, classified for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// The input line, unmodified
    pub raw_text: String,
    /// Text with status markers, subtask dash and time prefix removed
    pub display_text: String,
    pub category: LineCategory,
    pub status: LineStatus,
    /// Normalized "HH:MM" or "HH:MM - HH:MM"
    pub time: Option<String>,
}

impl ParsedLine {
    /// Whether a renderer has anything to show for this line
    pub fn is_blank(&self) -> bool {
        self.display_text.trim().is_empty() && self.time.is_none()
    }
}

/// Task counts for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayStats {
    pub total: usize,
    pub done: usize,
    pub partial: usize,
}

fn done_marker_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\s*\+\+\s*").unwrap())
}

fn partial_marker_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\s*\+-\s*").unwrap())
}

/// Single capitalized word, Latin or Cyrillic
fn header_word_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[A-ZА-ЯЁ][A-Za-zА-Яа-яЁё]*$").unwrap())
}

fn acronym_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[A-ZА-ЯЁ]{2,}$").unwrap())
}

fn subtask_bullet_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[—\-]\s*").unwrap())
}

/// Leading `10`, `10:00`, `10-11`, `10 - 11:30`, `9:00-12:30` followed by whitespace
fn time_prefix_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r"^([0-9]{1,2}(?::[0-9]{2})?\s*-\s*[0-9]{1,2}(?::[0-9]{2})?|[0-9]{1,2}:[0-9]{2}|[0-9]{1,2})\s+",
        )
        .unwrap()
    })
}

fn range_separator_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\s*-\s*").unwrap())
}

/// Classification rule, matched against the trimmed input line
struct CategoryRule {
    category: LineCategory,
    matches: fn(&str) -> bool,
    /// Applied to the display text when the rule wins
    strip: Option<fn(&str) -> String>,
}

fn is_header(trimmed: &str) -> bool {
    header_word_regex().is_match(trimmed) || acronym_regex().is_match(trimmed)
}

fn is_subtask(trimmed: &str) -> bool {
    trimmed.starts_with('—') || trimmed.starts_with('-')
}

fn strip_subtask_bullet(display: &str) -> String {
    subtask_bullet_regex().replace(display, "").into_owned()
}

// Evaluated in order; the first match wins, anything unmatched is a task.
const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: LineCategory::Header,
        matches: is_header,
        strip: None,
    },
    CategoryRule {
        category: LineCategory::Subtask,
        matches: is_subtask,
        strip: Some(strip_subtask_bullet),
    },
];

fn extract_status(trimmed: &str) -> (LineStatus, String) {
    if trimmed.contains("++") {
        let display = done_marker_regex().replace_all(trimmed, "");
        (LineStatus::Done, display.into_owned())
    } else if trimmed.contains("+-") {
        let display = partial_marker_regex().replace_all(trimmed, "");
        (LineStatus::Partial, display.into_owned())
    } else {
        (LineStatus::None, trimmed.to_string())
    }
}

fn extract_time(display: String) -> (Option<String>, String) {
    let Some(caps) = time_prefix_regex().captures(&display) else {
        return (None, display);
    };

    let time = range_separator_regex()
        .replacen(&caps[1], 1, " - ")
        .into_owned();
    let rest = display[caps[0].len()..].to_string();
    (Some(time), rest)
}

/// Parse a single line
pub fn parse_line(line: &str) -> ParsedLine {
    let trimmed = line.trim();

    let (status, mut display_text) = extract_status(trimmed);

    let mut category = LineCategory::Task;
    if let Some(rule) = CATEGORY_RULES.iter().find(|rule| (rule.matches)(trimmed)) {
        category = rule.category;
        if let Some(strip) = rule.strip {
            display_text = strip(&display_text);
        }
    }

    let (time, display_text) = extract_time(display_text);

    ParsedLine {
        raw_text: line.to_string(),
        display_text,
        category,
        status,
        time,
    }
}

/// Parse a day's text, one entry per `\n`-separated line
pub fn parse_content(text: &str) -> Vec<ParsedLine> {
    text.split('\n').map(parse_line).collect()
}

/// Count tasks, completed tasks and partially completed tasks.
///
/// Blank lines are tasks too, so an empty day counts one task.
pub fn count_stats(text: &str) -> DayStats {
    parse_content(text)
        .iter()
        .filter(|line| line.category == LineCategory::Task)
        .fold(DayStats::default(), |mut stats, line| {
            stats.total += 1;
            match line.status {
                LineStatus::Done => stats.done += 1,
                LineStatus::Partial => stats.partial += 1,
                LineStatus::None => {}
            }
            stats
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(text: &str) -> ParsedLine {
        let mut lines = parse_content(text);
        assert_eq!(lines.len(), 1);
        lines.remove(0)
    }

    #[test]
    fn test_plain_line_unchanged() {
        for text in ["buy milk", "  call the bank  ", "review PR #42", "Monday Review"] {
            let line = single(text);
            assert_eq!(line.display_text, text.trim());
            assert_eq!(line.status, LineStatus::None);
            assert_eq!(line.time, None);
            assert_eq!(line.raw_text, text);
        }
    }

    #[test]
    fn test_done_marker() {
        let line = single("++ Buy milk");
        assert_eq!(line.status, LineStatus::Done);
        assert_eq!(line.display_text, "Buy milk");
        assert_eq!(line.category, LineCategory::Task);
    }

    #[test]
    fn test_partial_marker_anywhere() {
        let line = single("Write report +-");
        assert_eq!(line.status, LineStatus::Partial);
        assert_eq!(line.display_text, "Write report");
    }

    #[test]
    fn test_done_takes_priority_over_partial() {
        let line = single("++ draft +- review");
        assert_eq!(line.status, LineStatus::Done);
        // Only the done marker is removed
        assert_eq!(line.display_text, "draft +- review");
    }

    #[test]
    fn test_marker_removal_swallows_surrounding_spaces() {
        let line = single("Buy ++ milk");
        assert_eq!(line.status, LineStatus::Done);
        assert_eq!(line.display_text, "Buymilk");
    }

    #[test]
    fn test_single_time() {
        let line = single("10:00 Standup");
        assert_eq!(line.time.as_deref(), Some("10:00"));
        assert_eq!(line.display_text, "Standup");
    }

    #[test]
    fn test_hour_only_time() {
        let line = single("9 Gym");
        assert_eq!(line.time.as_deref(), Some("9"));
        assert_eq!(line.display_text, "Gym");
    }

    #[test]
    fn test_time_range_normalized() {
        let line = single("10 - 11:30 Deep work");
        assert_eq!(line.time.as_deref(), Some("10 - 11:30"));
        assert_eq!(line.display_text, "Deep work");

        let line = single("10-11 Lunch");
        assert_eq!(line.time.as_deref(), Some("10 - 11"));
        assert_eq!(line.display_text, "Lunch");

        let line = single("9:00   -12:30 Workshop");
        assert_eq!(line.time.as_deref(), Some("9:00 - 12:30"));
        assert_eq!(line.display_text, "Workshop");
    }

    #[test]
    fn test_time_requires_trailing_whitespace() {
        let line = single("2025 goals");
        assert_eq!(line.time, None);
        assert_eq!(line.display_text, "2025 goals");

        let line = single("10:00");
        assert_eq!(line.time, None);
        assert_eq!(line.display_text, "10:00");
    }

    #[test]
    fn test_time_after_status_marker() {
        let line = single("++ 14:00 Dentist");
        assert_eq!(line.status, LineStatus::Done);
        assert_eq!(line.time.as_deref(), Some("14:00"));
        assert_eq!(line.display_text, "Dentist");
    }

    #[test]
    fn test_headers() {
        assert_eq!(single("WORK").category, LineCategory::Header);
        assert_eq!(single("Monday").category, LineCategory::Header);
        assert_eq!(single("Дом").category, LineCategory::Header);
        assert_eq!(single("ЁЛКА").category, LineCategory::Header);
        assert_eq!(single("  Errands  ").category, LineCategory::Header);
        assert_eq!(single("W").category, LineCategory::Header);
    }

    #[test]
    fn test_not_headers() {
        assert_eq!(single("Monday Review").category, LineCategory::Task);
        assert_eq!(single("monday").category, LineCategory::Task);
        assert_eq!(single("Work1").category, LineCategory::Task);
        assert_eq!(single("Work:").category, LineCategory::Task);
        assert_eq!(single("").category, LineCategory::Task);
    }

    #[test]
    fn test_header_heuristic_catches_single_word_tasks() {
        // A one-word task is indistinguishable from a section header
        assert_eq!(single("Shopping").category, LineCategory::Header);
    }

    #[test]
    fn test_subtask_hyphen() {
        let line = single("- Follow up");
        assert_eq!(line.category, LineCategory::Subtask);
        assert_eq!(line.display_text, "Follow up");
    }

    #[test]
    fn test_subtask_em_dash_with_status() {
        let line = single("— ++ Call mom");
        assert_eq!(line.category, LineCategory::Subtask);
        assert_eq!(line.status, LineStatus::Done);
        assert_eq!(line.display_text, "Call mom");
    }

    #[test]
    fn test_subtask_with_time() {
        let line = single("- 15:30 Pick up kids");
        assert_eq!(line.category, LineCategory::Subtask);
        assert_eq!(line.time.as_deref(), Some("15:30"));
        assert_eq!(line.display_text, "Pick up kids");
    }

    #[test]
    fn test_empty_input_yields_one_task_line() {
        let lines = parse_content("");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].category, LineCategory::Task);
        assert!(lines[0].is_blank());
    }

    #[test]
    fn test_one_entry_per_line() {
        let lines = parse_content("Work\n10:00 Standup\n- notes\n\n++ ship");
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].category, LineCategory::Header);
        assert_eq!(lines[1].time.as_deref(), Some("10:00"));
        assert_eq!(lines[2].category, LineCategory::Subtask);
        assert!(lines[3].is_blank());
        assert_eq!(lines[4].status, LineStatus::Done);
    }

    #[test]
    fn test_markers_never_left_in_display_text() {
        for text in ["++ a", "a ++", "+- b", "- ++ c", "10:00 ++ d", "++++ e"] {
            let line = single(text);
            assert!(!line.display_text.contains("++"), "{text}");
        }
    }

    #[test]
    fn test_parse_is_deterministic() {
        let text = "Work\n++ 10 - 11 Standup\n— +- notes";
        assert_eq!(parse_content(text), parse_content(text));
    }

    #[test]
    fn test_count_stats() {
        let stats = count_stats("++ A\n+- B\nC");
        assert_eq!(
            stats,
            DayStats {
                total: 3,
                done: 1,
                partial: 1
            }
        );
    }

    #[test]
    fn test_count_stats_counts_blank_lines() {
        let lines = parse_content("buy milk\n\n++ call bank");
        assert!(lines.iter().all(|l| l.category == LineCategory::Task));

        assert_eq!(
            count_stats("buy milk\n\n++ call bank"),
            DayStats {
                total: 3,
                done: 1,
                partial: 0
            }
        );
        assert_eq!(count_stats("").total, 1);
    }

    #[test]
    fn test_count_stats_ignores_headers_and_subtasks() {
        let stats = count_stats("WORK\n++ ship release\n- ++ write notes\nHome\n+- laundry");
        assert_eq!(stats.total, 2);
        assert_eq!(stats.done, 1);
        assert_eq!(stats.partial, 1);
    }
}
