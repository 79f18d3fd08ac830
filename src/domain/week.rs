//! Week model and calendar arithmetic
//!
//! Weeks start on Monday. Week 1 of a year is the week containing January 1,
//! so the last days of December can belong to week 1 of the following year.

use crate::domain::week_codec::{day_marker_index, ImportResult};
use crate::error::{Result, WeekplanError};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of days in a planning week
pub const DAYS_IN_WEEK: usize = 7;

const WEEKS_PER_QUARTER: u32 = 13;

/// Monday of the week containing `date`
fn week_monday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Monday of week 1 of `year`
fn first_week_start(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1).map(week_monday)
}

fn check_year(year: i32) -> Result<()> {
    if (1..=9998).contains(&year) {
        Ok(())
    } else {
        Err(WeekplanError::InvalidWeekReference(format!(
            "year {} is out of range",
            year
        )))
    }
}

/// Number of weeks (52 or 53) in `year`
pub fn weeks_in_year(year: i32) -> Result<u32> {
    check_year(year)?;
    match (first_week_start(year), first_week_start(year + 1)) {
        (Some(start), Some(next)) => Ok(((next - start).num_days() / 7) as u32),
        _ => Err(WeekplanError::InvalidWeekReference(format!(
            "year {} is out of range",
            year
        ))),
    }
}

/// Identifies one week of one year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekId {
    year: i32,
    week_number: u32,
    start: NaiveDate,
}

impl WeekId {
    pub fn new(year: i32, week_number: u32) -> Result<Self> {
        let total = weeks_in_year(year)?;
        if week_number == 0 || week_number > total {
            return Err(WeekplanError::InvalidWeekReference(format!(
                "{}-W{:02} (year {} has {} weeks)",
                year, week_number, year, total
            )));
        }

        let start = first_week_start(year)
            .map(|monday| monday + Duration::weeks(week_number as i64 - 1))
            .ok_or_else(|| {
                WeekplanError::InvalidWeekReference(format!("year {} is out of range", year))
            })?;

        Ok(WeekId {
            year,
            week_number,
            start,
        })
    }

    /// The week a date falls in
    pub fn containing(date: NaiveDate) -> Result<Self> {
        let monday = week_monday(date);
        let year = date.year();

        if let Some(next_start) = first_week_start(year + 1) {
            if monday >= next_start {
                return WeekId::new(year + 1, 1);
            }
        }

        let start = first_week_start(year).ok_or_else(|| {
            WeekplanError::InvalidWeekReference(format!("{} is out of range", date))
        })?;
        let week_number = ((monday - start).num_days() / 7) as u32 + 1;
        WeekId::new(year, week_number)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn week_number(&self) -> u32 {
        self.week_number
    }

    /// Monday
    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    /// Sunday
    pub fn end_date(&self) -> NaiveDate {
        self.start + Duration::days(6)
    }

    /// Monday through Sunday
    pub fn dates(&self) -> [NaiveDate; DAYS_IN_WEEK] {
        std::array::from_fn(|i| self.start + Duration::days(i as i64))
    }

    pub fn previous(&self) -> Result<WeekId> {
        if self.week_number > 1 {
            WeekId::new(self.year, self.week_number - 1)
        } else {
            WeekId::new(self.year - 1, weeks_in_year(self.year - 1)?)
        }
    }

    pub fn next(&self) -> Result<WeekId> {
        if self.week_number < weeks_in_year(self.year)? {
            WeekId::new(self.year, self.week_number + 1)
        } else {
            WeekId::new(self.year + 1, 1)
        }
    }

    /// Quarter (1-4); a 53rd week belongs to the fourth quarter
    pub fn quarter(&self) -> u32 {
        self.week_number.div_ceil(WEEKS_PER_QUARTER).min(4)
    }

    /// File name offered for an exported week, e.g. `week-2025-03.txt`
    pub fn export_filename(&self) -> String {
        format!("week-{}-{:02}.txt", self.year, self.week_number)
    }
}

/// Week numbers belonging to a quarter; the fourth quarter runs to the end of the year
pub fn weeks_in_quarter(year: i32, quarter: u32) -> Result<Vec<u32>> {
    if !(1..=4).contains(&quarter) {
        return Err(WeekplanError::InvalidWeekReference(format!(
            "quarter {} (expected 1-4)",
            quarter
        )));
    }

    let total = weeks_in_year(year)?;
    let first = (quarter - 1) * WEEKS_PER_QUARTER + 1;
    let last = if quarter == 4 {
        total
    } else {
        (quarter * WEEKS_PER_QUARTER).min(total)
    };
    Ok((first..=last).collect())
}

impl fmt::Display for WeekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week_number)
    }
}

impl FromStr for WeekId {
    type Err = WeekplanError;

    /// Parse `YYYY-Www` (e.g. `2025-W03`)
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || WeekplanError::InvalidWeekReference(s.to_string());

        let (year, week) = s.trim().split_once('-').ok_or_else(invalid)?;
        let week = week
            .strip_prefix('W')
            .or_else(|| week.strip_prefix('w'))
            .ok_or_else(invalid)?;

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let week: u32 = week.parse().map_err(|_| invalid())?;
        WeekId::new(year, week)
    }
}

/// One day of a stored week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    pub day_index: usize,
    #[serde(default)]
    pub content: String,
}

/// A planned week: focus text plus raw text for each day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub year: i32,
    pub week_number: u32,
    #[serde(default)]
    pub focus_text: String,
    #[serde(default)]
    pub days: Vec<DayEntry>,
}

impl Week {
    /// A week with no focus and seven empty days
    pub fn empty(id: WeekId) -> Self {
        Week {
            year: id.year(),
            week_number: id.week_number(),
            focus_text: String::new(),
            days: (0..DAYS_IN_WEEK)
                .map(|day_index| DayEntry {
                    day_index,
                    content: String::new(),
                })
                .collect(),
        }
    }

    pub fn id(&self) -> Result<WeekId> {
        WeekId::new(self.year, self.week_number)
    }

    /// Raw text of a day, empty when the day was never written
    pub fn day_content(&self, day_index: usize) -> &str {
        self.days
            .iter()
            .find(|d| d.day_index == day_index)
            .map(|d| d.content.as_str())
            .unwrap_or("")
    }

    pub fn set_day(&mut self, day_index: usize, content: &str) {
        match self.days.iter_mut().find(|d| d.day_index == day_index) {
            Some(day) => day.content = content.to_string(),
            None => {
                self.days.push(DayEntry {
                    day_index,
                    content: content.to_string(),
                });
                self.days.sort_by_key(|d| d.day_index);
            }
        }
    }

    /// Apply an import patch: focus only when non-empty, listed days only
    pub fn apply_import(&mut self, patch: &ImportResult) {
        if !patch.focus_text.is_empty() {
            self.focus_text = patch.focus_text.clone();
        }
        for day in &patch.days {
            self.set_day(day.day_index, &day.content);
        }
    }
}

/// Number of non-blank lines in a week's focus text
pub fn focus_line_count(text: &str) -> usize {
    text.lines().filter(|line| !line.trim().is_empty()).count()
}

/// Resolve a user-supplied day: any day marker (`mon`, `Пн`, `friday`) or 1-7
pub fn parse_day(token: &str) -> Result<usize> {
    if let Some(index) = day_marker_index(token) {
        return Ok(index);
    }

    match token.trim().parse::<usize>() {
        Ok(n @ 1..=7) => Ok(n - 1),
        _ => Err(WeekplanError::InvalidDay(token.to_string())),
    }
}
