//! CLI command definitions.

pub mod month;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use rallycal_core::calendar::{EventId, ExpandMode, RegionFilter, ALL_REGIONS_LABEL};
use rallycal_core::source::LoadOptions;

pub use month::YearMonth;

/// Assembly event calendar.
#[derive(Debug, Parser)]
#[command(name = "rallycal")]
#[command(about = "Assembly event calendar", long_about = None)]
pub struct Cli {
    /// Schedule document: a file path or an http(s) URL.
    #[arg(long, env = "RALLYCAL_SOURCE", default_value = "./schedule.json")]
    pub source: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    /// Region filter (전체, 서울, 경기, 강원, 충청, 전라, 경상, 제주).
    #[arg(long, default_value = ALL_REGIONS_LABEL)]
    pub region: RegionFilter,

    /// Override today's date (YYYY-MM-DD).
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Fail on the first invalid record instead of skipping it.
    #[arg(long)]
    pub strict: bool,

    /// Keep multi-day events whole instead of one row per day.
    #[arg(long)]
    pub whole: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.quiet {
            "rallycal=warn"
        } else {
            "rallycal=info"
        }
    }

    /// Load options selected by the flags. `strict` is combined with the
    /// configuration by the caller.
    pub fn load_options(&self, strict: bool) -> LoadOptions {
        LoadOptions {
            strict: self.strict || strict,
            mode: if self.whole {
                ExpandMode::Whole
            } else {
                ExpandMode::PerDay
            },
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Chronological event list, marking the first upcoming event.
    List,
    /// Month grid plus the events of that month.
    Calendar {
        /// Month to show (YYYY-MM). Defaults to the current month.
        #[arg(long)]
        month: Option<YearMonth>,
        /// Day to select within the month.
        #[arg(long)]
        day: Option<u32>,
    },
    /// Event details.
    Show {
        /// Event ID (`<source>-<day>`).
        id: EventId,
    },
    /// Export an event as an iCalendar file.
    Export {
        /// Event ID (`<source>-<day>`).
        id: EventId,
        /// Output path. Defaults to `<title>.ics`; `-` writes to stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Share an event as plain text.
    Share {
        /// Event ID (`<source>-<day>`).
        id: EventId,
    },
    /// Titles of today's events.
    Today,
    /// Known regions.
    Regions,
    /// Print a generated sample schedule document.
    Sample {
        /// Number of events.
        #[arg(long, default_value = "12")]
        count: u32,
        /// Center date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        center: Option<NaiveDate>,
    },
}

impl Commands {
    /// Returns true if the command reads the schedule document.
    pub fn needs_schedule(&self) -> bool {
        !matches!(self, Commands::Regions | Commands::Sample { .. })
    }
}
