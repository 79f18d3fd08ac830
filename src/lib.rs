//! weekplan - Terminal weekly planner
//!
//! Keeps one plain-text blob per weekday plus a week focus, renders the
//! ad-hoc markers in those blobs (`++` done, `+-` partial, time prefixes,
//! headers, subtasks) and exchanges whole weeks as text that survives
//! pasting into chats and notes.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::WeekplanError;
