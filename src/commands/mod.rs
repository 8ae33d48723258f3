//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod csv;
pub mod dump;
pub mod models;
pub mod utils;
pub mod validate;

// Re-export main command functions
pub use csv::{convert_csv, execute_csv, validate_csv_args};
pub use dump::{dump_text, execute_dump};
pub use models::{CsvArgs, CsvOptions, CsvReport, DumpArgs, LogSummary, ValidateArgs};
pub use utils::display_version;
pub use validate::{execute_validate, summarize_log};
