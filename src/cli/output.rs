//! Output formatting utilities

use crate::application::WeekSummary;
use crate::domain::week::{focus_line_count, weeks_in_quarter, DAYS_IN_WEEK};
use crate::domain::{
    count_stats, parse_content, LineCategory, LineStatus, Locale, ParsedLine, Week, WeekId,
};
use crate::error::Result;

/// Which parsed lines to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineFilter {
    #[default]
    All,
    /// Hide lines marked done
    Incomplete,
}

impl LineFilter {
    fn keeps(&self, line: &ParsedLine) -> bool {
        match self {
            LineFilter::All => true,
            LineFilter::Incomplete => line.status != LineStatus::Done,
        }
    }
}

/// Format one parsed line, or `None` when there is nothing to show
pub fn format_line(line: &ParsedLine) -> Option<String> {
    if line.is_blank() {
        return None;
    }

    let mut output = String::new();
    if line.category == LineCategory::Subtask {
        output.push_str("  ");
    }
    if let Some(time) = &line.time {
        output.push_str(&format!("{:<5} ", time));
    }
    output.push_str(&line.display_text);

    match line.status {
        LineStatus::Done => output.push_str(" ✓"),
        LineStatus::Partial => output.push_str(" ◐"),
        LineStatus::None => {}
    }

    Some(output)
}

fn week_range(id: WeekId) -> String {
    format!(
        "{} - {}",
        id.start_date().format("%d.%m.%y"),
        id.end_date().format("%d.%m.%y")
    )
}

/// Format the lines of a day's text, indented under a heading
fn format_lines(text: &str, filter: LineFilter) -> Vec<String> {
    parse_content(text)
        .iter()
        .filter(|line| filter.keeps(line))
        .filter_map(|line| {
            format_line(line).map(|formatted| {
                if line.category == LineCategory::Header {
                    format!("  {}:", formatted)
                } else {
                    format!("    {}", formatted)
                }
            })
        })
        .collect()
}

/// Format a whole week: heading, focus and seven days
pub fn format_week(week: &Week, id: WeekId, locale: Locale, filter: LineFilter) -> String {
    let mut output = format!(
        "{} {}, Q{} ({})\n",
        locale.week_label(),
        id.week_number(),
        id.quarter(),
        week_range(id)
    );

    let focus_lines = focus_line_count(&week.focus_text);
    if focus_lines > 0 {
        output.push_str(&format!("\n🎯 {} ({})\n", locale.focus_title(), focus_lines));
        for line in week.focus_text.lines().filter(|l| !l.trim().is_empty()) {
            output.push_str(&format!("    {}\n", line.trim()));
        }
    }

    for (day_index, date) in id.dates().iter().enumerate() {
        let content = week.day_content(day_index);
        let stats = count_stats(content);

        output.push_str(&format!(
            "\n{} {}  {}/{}\n",
            locale.day_name(day_index),
            date.format("%d.%m"),
            stats.done,
            stats.total
        ));

        let lines = format_lines(content, filter);
        if lines.is_empty() {
            output.push_str(&format!("    {}\n", locale.no_tasks()));
        }
        for line in lines {
            output.push_str(&line);
            output.push('\n');
        }
    }

    output
}

/// Format per-day task counts and the week total
pub fn format_stats(week: &Week, locale: Locale) -> String {
    let mut output = String::new();
    let mut total = (0, 0, 0);

    for day_index in 0..DAYS_IN_WEEK {
        let stats = count_stats(week.day_content(day_index));
        total = (
            total.0 + stats.done,
            total.1 + stats.partial,
            total.2 + stats.total,
        );
        output.push_str(&format!(
            "{:<4} {}/{} done, {} partial\n",
            locale.day_abbreviation(day_index),
            stats.done,
            stats.total,
            stats.partial
        ));
    }

    output.push_str(&format!(
        "---\n{}/{} done, {} partial\n",
        total.0, total.2, total.1
    ));
    output
}

/// Format a list of stored weeks for display
pub fn format_week_list(weeks: &[WeekSummary]) -> String {
    if weeks.is_empty() {
        return "No weeks found".to_string();
    }

    let mut output = String::new();
    for summary in weeks {
        output.push_str(&format!(
            "{}  Q{}  {}/{}  🎯{}  {}\n",
            summary.entry.id,
            summary.entry.id.quarter(),
            summary.stats.done,
            summary.stats.total,
            summary.focus_lines,
            summary.entry.filename
        ));
    }
    output
}

/// Format every week of the quarter `current` falls in, marking `current`
pub fn format_quarter(current: WeekId, locale: Locale) -> Result<String> {
    let year = current.year();
    let quarter = current.quarter();

    let mut output = format!("Q{} {}\n", quarter, year);
    for week_number in weeks_in_quarter(year, quarter)? {
        let id = WeekId::new(year, week_number)?;
        let marker = if id == current { " <" } else { "" };
        output.push_str(&format!(
            "  {} {:>2}  {}{}\n",
            locale.week_label(),
            week_number,
            week_range(id),
            marker
        ));
    }
    Ok(output)
}
