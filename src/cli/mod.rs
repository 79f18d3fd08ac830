//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{format_quarter, format_stats, format_week, format_week_list, LineFilter};
