use crate::utils::config::{
    DEFAULT_COMMENT_PREFIX, DEFAULT_FIELD_SEPARATOR, FIRST_FIELD_NUMBER, SUMMARY_VERSION,
};
use serde::Serialize;
use std::path::PathBuf;

/// Rendering options for CSV output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    /// Separator placed between fields of a row
    pub field_separator: String,

    /// Print the numbered header comment before the rows
    pub header: bool,

    /// Sum samples sharing a size; otherwise print samples as they arrive
    pub aggregate: bool,

    /// Prefix for header comment lines
    pub comment_prefix: String,

    /// Column number of the size field in the header comment
    pub first_field: usize,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            field_separator: DEFAULT_FIELD_SEPARATOR.to_string(),
            header: true,
            aggregate: true,
            comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
            first_field: FIRST_FIELD_NUMBER,
        }
    }
}

/// Arguments for the csv command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct CsvArgs {
    /// Pirate log to read
    pub log: PathBuf,

    /// Output file (stdout if None)
    pub output: Option<PathBuf>,

    pub options: CsvOptions,
}

/// Arguments for the dump command
#[derive(Debug, Clone, Default)]
pub struct DumpArgs {
    pub log: PathBuf,
    pub output: Option<PathBuf>,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Default)]
pub struct ValidateArgs {
    pub log: PathBuf,

    /// Print the summary as JSON
    pub json: bool,
}

/// Counts reported after converting a log
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CsvReport {
    /// Samples read from the log
    pub samples: usize,

    /// CSV rows written
    pub rows: usize,
}

/// Result of a full validation pass over a log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogSummary {
    /// Summary format version
    pub version: String,

    /// Target command line from the header
    pub command: String,

    /// Number of sample records
    pub samples: usize,

    /// Distinct sample sizes, ascending
    pub sizes: Vec<i32>,

    /// Counters per target vector
    pub target_counters: usize,

    /// Counters per pirate vector
    pub pirate_counters: usize,

    /// Pirate vectors per sample
    pub pirates: usize,
}

impl Default for LogSummary {
    fn default() -> Self {
        Self {
            version: SUMMARY_VERSION.to_string(),
            command: String::new(),
            samples: 0,
            sizes: Vec::new(),
            target_counters: 0,
            pirate_counters: 0,
            pirates: 0,
        }
    }
}
