//! Command-line configuration.
//!
//! Nothing is read from or written to disk between runs; these options only
//! shape the session that is about to start.

use std::path::PathBuf;

use clap::Parser;
use wage_core::Locale;

/// Weekly work-day and wage tracker.
///
/// Record which days each worker worked, deduct jama, mark entries paid and
/// save the week's ledger as a CSV report.
#[derive(Debug, Parser)]
#[command(name = "WageTracker", version)]
pub struct Cli {
    /// Starting display language (`english` or `kannada`).
    #[arg(long, default_value = "english")]
    pub lang: Locale,

    /// Log filter, e.g. `debug` or `info,wage_core=trace`.
    /// Overrides `RUST_LOG` when given.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Directory the report save dialog opens in.
    /// Defaults to the current directory.
    #[arg(long)]
    pub export_dir: Option<PathBuf>,
}

/// Logging options taken from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

/// Resolved settings for one run of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub locale: Locale,
    pub export_dir: PathBuf,
    pub logging: LogConfig,
}

impl Cli {
    pub fn into_config(self) -> AppConfig {
        let export_dir = self
            .export_dir
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));

        AppConfig {
            locale: self.lang,
            export_dir,
            logging: LogConfig {
                level: self.log_level,
                file: self.log_file,
            },
        }
    }
}
