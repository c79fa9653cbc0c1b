// Error types for beekeeper

use snafu::Snafu;
use std::{io, path::PathBuf};

#[derive(Debug, Snafu)]
pub enum BeekeeperError {
    // Data integrity errors from upstream collaborators
    #[snafu(display("Invalid {field} value: '{value}'"))]
    InvalidEnumValue { field: &'static str, value: String },

    // Config management errors
    #[snafu(display("Could not find application data directory to save config file"))]
    NoConfigDir,
    #[snafu(display("Error reading or writing config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerializeError { source: serde_json::Error },
    #[snafu(display("Error parsing config file {}", path.display()))]
    ConfigParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    // Data provider errors
    #[snafu(display("Unable to read dashboard data file {}", path.display()))]
    DataFileError { path: PathBuf, source: io::Error },
    #[snafu(display("Invalid dashboard data in {}", path.display()))]
    DataParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[snafu(display("Unable to read recommendations feed {}", path.display()))]
    DataFeedError { path: PathBuf, source: io::Error },

    // CLI and UI errors
    #[snafu(display("Invalid weather timeframe: '{value}', expected 'today' or '5day'"))]
    InvalidTimeframe { value: String },
    #[snafu(display("Dashboard window error: {reason}"))]
    UiError { reason: String },
}
