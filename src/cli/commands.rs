//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "weekplan")]
#[command(about = "Terminal weekly planner", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Week to show (e.g., this, last, next, 2025-W03, 15-01-2025)
    #[arg(value_name = "WEEK")]
    pub week: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new planner
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Interface language (en, ru)
        #[arg(short, long, default_value = "en")]
        locale: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Show a week's focus and days
    Show {
        /// Week reference (default: this week)
        week: Option<String>,

        /// Hide tasks marked done
        #[arg(short, long)]
        incomplete: bool,
    },

    /// Replace the text of a day or of the week focus
    Set {
        /// Day (mon, Пн, monday, 1-7) or "focus"
        target: String,

        /// New text; read from stdin when omitted
        text: Vec<String>,

        /// Week reference (default: this week)
        #[arg(short, long)]
        week: Option<String>,
    },

    /// Show task counts per day
    Stats {
        /// Week reference (default: this week)
        week: Option<String>,
    },

    /// List the weeks of a quarter
    Quarter {
        /// Any week of the quarter (default: this week)
        week: Option<String>,
    },

    /// List stored weeks, newest first
    List {
        /// Maximum number of weeks to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Export a week as plain text
    Export {
        /// Week reference (default: this week)
        week: Option<String>,

        /// File or directory to write to (default: week-YYYY-WW.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Language of the export (default: configured locale)
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Import a week from plain text
    Import {
        /// File to read; "-" or omitted reads stdin
        file: Option<PathBuf>,

        /// Week to import into (default: this week)
        #[arg(short, long)]
        week: Option<String>,

        /// Apply the import
        #[arg(short, long)]
        yes: bool,
    },
}
