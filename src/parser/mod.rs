//! Pirate log decoding.
//!
//! This module handles:
//! - Validating the file magic
//! - Reading length-prefixed frames
//! - Decoding header and sample messages
//! - Writing logs in the same format

pub mod frame;
pub mod log_stream;
pub mod schema;

// Re-export main types
pub use frame::{read_frame, read_magic, write_frame, write_magic};
pub use log_stream::{open_log, stream_dumps, DumpStream, LogWriter};
pub use schema::{perf_header, PerfCtrDump, PerfCtrInfo, PerfCtrSample, PerfHeader};
