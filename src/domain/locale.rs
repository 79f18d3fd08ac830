//! Interface languages and their fixed strings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language used for exports and terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

const DAY_ABBREVIATIONS_EN: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const DAY_ABBREVIATIONS_RU: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];

const DAY_NAMES_EN: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];
const DAY_NAMES_RU: [&str; 7] = [
    "Понедельник",
    "Вторник",
    "Среда",
    "Четверг",
    "Пятница",
    "Суббота",
    "Воскресенье",
];

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    /// Leading words of the export title line
    pub fn week_plan_title(&self) -> &'static str {
        match self {
            Locale::En => "Week plan",
            Locale::Ru => "План на неделю",
        }
    }

    /// Line that opens the focus section of an export
    pub fn focus_header(&self) -> &'static str {
        match self {
            Locale::En => "🎯 Week Focus:",
            Locale::Ru => "🎯 Фокус недели:",
        }
    }

    pub fn focus_title(&self) -> &'static str {
        match self {
            Locale::En => "Week Focus",
            Locale::Ru => "Фокус недели",
        }
    }

    /// Three-letter (en) or two-letter (ru) day abbreviation, 0 = Monday
    pub fn day_abbreviation(&self, day_index: usize) -> &'static str {
        match self {
            Locale::En => DAY_ABBREVIATIONS_EN[day_index % 7],
            Locale::Ru => DAY_ABBREVIATIONS_RU[day_index % 7],
        }
    }

    pub fn day_name(&self, day_index: usize) -> &'static str {
        match self {
            Locale::En => DAY_NAMES_EN[day_index % 7],
            Locale::Ru => DAY_NAMES_RU[day_index % 7],
        }
    }

    /// Summary shown before an import is applied
    pub fn import_summary(&self, days: usize, focus_changes: bool) -> String {
        match self {
            Locale::En => {
                let mut summary = format!("{} days will be updated.", days);
                if focus_changes {
                    summary.push_str("\nWeek focus will be updated.");
                }
                summary.push_str("\nCurrent data will be replaced.");
                summary
            }
            Locale::Ru => {
                let mut summary = format!("{} дней будут обновлены.", days);
                if focus_changes {
                    summary.push_str("\nФокус недели будет обновлен.");
                }
                summary.push_str("\nТекущие данные будут заменены.");
                summary
            }
        }
    }

    pub fn week_label(&self) -> &'static str {
        match self {
            Locale::En => "Week",
            Locale::Ru => "Неделя",
        }
    }

    pub fn no_tasks(&self) -> &'static str {
        match self {
            Locale::En => "No tasks",
            Locale::Ru => "Нет задач",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            _ => Err(format!(
                "Invalid locale: '{}'. Valid locales are: en, ru",
                s
            )),
        }
    }
}
