use thiserror::Error;

use super::config::ConfigError;
use crate::core::alignment::AlignmentError;
use crate::core::io::tsv::TableError;
use crate::core::protparam::AnalysisError;

/// Failure of a single HTTP round-trip.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} answered with HTTP status {status}")]
    Status { url: String, status: u16 },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Initialization failed: {0}")]
    Initialization(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to fetch record for '{identifier}': {source}")]
    RecordFetch {
        identifier: String,
        #[source]
        source: FetchError,
    },

    #[error("Failed to fetch interaction network for '{identifier}': {source}")]
    NetworkFetch {
        identifier: String,
        #[source]
        source: FetchError,
    },

    #[error("Interaction network for '{identifier}' could not be parsed: {source}")]
    NetworkTable {
        identifier: String,
        #[source]
        source: TableError,
    },

    #[error("Sequence analysis failed: {source}")]
    Analysis {
        #[from]
        source: AnalysisError,
    },

    #[error("Alignment failed: {source}")]
    Alignment {
        #[from]
        source: AlignmentError,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}
