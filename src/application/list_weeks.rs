//! List weeks use case

use crate::domain::week::{focus_line_count, DAYS_IN_WEEK};
use crate::domain::{count_stats, DayStats};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, WeekEntry, WeekRepository};

/// A stored week with its task counts summed over all days
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekSummary {
    pub entry: WeekEntry,
    pub stats: DayStats,
    pub focus_lines: usize,
}

/// List stored weeks, newest first, with an optional limit.
pub fn list_weeks(
    repository: &FileSystemRepository,
    limit: Option<usize>,
) -> Result<Vec<WeekSummary>> {
    repository
        .list_weeks(limit)?
        .into_iter()
        .map(|entry| {
            let week = repository.load_week(entry.id)?;
            let stats = (0..DAYS_IN_WEEK)
                .map(|day| count_stats(week.day_content(day)))
                .fold(DayStats::default(), |acc, day| DayStats {
                    total: acc.total + day.total,
                    done: acc.done + day.done,
                    partial: acc.partial + day.partial,
                });

            Ok(WeekSummary {
                entry,
                stats,
                focus_lines: focus_line_count(&week.focus_text),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Week, WeekId};
    use tempfile::TempDir;

    #[test]
    fn test_list_weeks_sums_stats() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let mut week = Week::empty(WeekId::new(2025, 3).unwrap());
        week.focus_text = "Ship it\n\nHire".to_string();
        week.set_day(0, "++ A\n+- B\nC");
        week.set_day(3, "WORK\n++ D\n- sub");
        repo.save_week(&week).unwrap();
        repo.save_week(&Week::empty(WeekId::new(2025, 4).unwrap()))
            .unwrap();

        let summaries = list_weeks(&repo, None).unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].entry.id.to_string(), "2025-W04");

        let third = &summaries[1];
        assert_eq!(third.focus_lines, 2);
        // Four tasks plus one blank line for each of the five empty days
        assert_eq!(third.stats.total, 9);
        assert_eq!(third.stats.done, 2);
        assert_eq!(third.stats.partial, 1);
    }
}
