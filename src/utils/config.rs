//! Configuration and constants for the CLI.

/// Magic token at the start of every pirate log
pub const LOG_MAGIC: &[u8; 8] = b"PIRATEv1";

/// Width of the frame length prefix (u32, native byte order)
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Default CSV field separator
pub const DEFAULT_FIELD_SEPARATOR: &str = " ";

/// Prefix for header comment lines
pub const DEFAULT_COMMENT_PREFIX: &str = "#";

/// Column number of the first CSV field (the cache size)
pub const FIRST_FIELD_NUMBER: usize = 1;

/// Process exit status when a log cannot be read
pub const READ_FAILURE_EXIT_CODE: i32 = 2;

/// Version of the JSON summary printed by `validate --json`
pub const SUMMARY_VERSION: &str = "1.0.0";
